table! {
    appointments (id) {
        id -> Unsigned<Bigint>,
        agent_name -> Varchar,
        date_time -> Datetime,
        ailment -> Varchar,
        treatment -> Varchar,
        notes -> Nullable<Text>,
    }
}
