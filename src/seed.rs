use crate::{
    database::AppointmentStore,
    models::appointments::NewAppointment,
    utils::{format_time_str, parse_time_str},
};

/// (agent name, time, ailment, treatment, notes)
const SEED_ROWS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Claude-3",
        "2026-02-10T09:00:00Z",
        "VaguePromptSyndrome",
        "SpecTherapy",
        "Patient keeps receiving \"make it better\" with no context",
    ),
    (
        "GPT-4",
        "2026-02-10T10:30:00Z",
        "ScopeCreepFever",
        "BoundarySetting",
        "Human changed requirements 47 times in one session",
    ),
    (
        "Gemini",
        "2026-02-10T14:00:00Z",
        "ContextStarvation",
        "ContextInfusion",
        "No background docs, no tech stack info, nothing",
    ),
    (
        "Copilot",
        "2026-02-11T11:00:00Z",
        "MicromanagementTrauma",
        "TrustExercises",
        "Human approves every autocomplete suggestion individually",
    ),
];

pub fn seed_appointments() -> anyhow::Result<Vec<NewAppointment>> {
    SEED_ROWS
        .iter()
        .map(|&(agent_name, time, ailment, treatment, notes)| {
            NewAppointment::from_labels(
                agent_name,
                parse_time_str(time)?,
                ailment,
                treatment,
                Some(notes),
            )
        })
        .collect()
}

/// Clears the appointment table and inserts the sample rows.
pub fn run_seed<S: AppointmentStore>(store: &S) -> anyhow::Result<usize> {
    let records = seed_appointments()?;
    for record in &records {
        log::debug!(
            "{} at {}: {} -> {}",
            record.agent_name,
            format_time_str(&record.date_time),
            record.ailment,
            record.treatment
        );
    }

    let inserted = store.replace_all(&records)?;
    log::info!("Inserted {} appointments", inserted);
    log::info!("Seed data created successfully");

    Ok(inserted)
}

/// The line printed to the operator when seeding fails, with the full cause chain.
pub fn failure_report(err: &anyhow::Error) -> String {
    format!("Seeding failed: {:#}", err)
}
