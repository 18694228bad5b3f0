use crate::schema::appointments;
use chrono::NaiveDateTime;

use super::enums::{Ailment, Treatment};

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: u64,
    pub agent_name: String,
    pub date_time: NaiveDateTime,
    pub ailment: Ailment,
    pub treatment: Treatment,
    pub notes: Option<String>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub agent_name: String,
    pub date_time: NaiveDateTime,
    pub ailment: Ailment,
    pub treatment: Treatment,
    pub notes: Option<String>,
}

impl NewAppointment {
    /// Labels are checked here, so a row that reaches storage is always within the closed sets.
    pub fn from_labels(
        agent_name: &str,
        date_time: NaiveDateTime,
        ailment: &str,
        treatment: &str,
        notes: Option<&str>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            agent_name: agent_name.to_string(),
            date_time,
            ailment: ailment.parse()?,
            treatment: treatment.parse()?,
            notes: notes.map(str::to_string),
        })
    }
}
