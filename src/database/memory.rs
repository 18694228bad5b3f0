use anyhow::bail;
use std::cell::{Cell, RefCell};

use super::{clear_then_insert, AppointmentStore};
use crate::models::appointments::{Appointment, NewAppointment};

/// In-memory store for tests. Ids keep increasing across deletes, like an auto-increment column.
#[derive(Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<Appointment>>,
    next_id: Cell<u64>,
    fail_on: Cell<Option<&'static str>>,
    pub calls: RefCell<Vec<&'static str>>,
}

impl MemoryStore {
    /// Makes the next `call` fail without touching any rows.
    pub fn fail_on(&self, call: &'static str) {
        self.fail_on.set(Some(call));
    }

    fn enter(&self, call: &'static str) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_on.get() == Some(call) {
            self.fail_on.set(None);
            bail!("DB error");
        }
        Ok(())
    }
}

impl AppointmentStore for MemoryStore {
    fn delete_all(&self) -> anyhow::Result<usize> {
        self.enter("delete_all")?;
        Ok(self.rows.borrow_mut().drain(..).count())
    }

    fn create_many(&self, records: &[NewAppointment]) -> anyhow::Result<usize> {
        self.enter("create_many")?;
        let mut rows = self.rows.borrow_mut();
        for record in records {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            rows.push(Appointment {
                id,
                agent_name: record.agent_name.clone(),
                date_time: record.date_time,
                ailment: record.ailment,
                treatment: record.treatment,
                notes: record.notes.clone(),
            });
        }
        Ok(records.len())
    }

    fn find_all(&self) -> anyhow::Result<Vec<Appointment>> {
        self.enter("find_all")?;
        Ok(self.rows.borrow().clone())
    }

    fn count(&self) -> anyhow::Result<i64> {
        self.enter("count")?;
        Ok(self.rows.borrow().len() as i64)
    }

    /// Restores the previous rows on failure, like the MySQL transaction.
    fn replace_all(&self, records: &[NewAppointment]) -> anyhow::Result<usize> {
        let snapshot = self.rows.borrow().clone();
        clear_then_insert(self, records).map_err(|err| {
            *self.rows.borrow_mut() = snapshot;
            err
        })
    }
}
