use agent_clinic::{config, database::MysqlStore, seed};
use std::process;

fn run() -> anyhow::Result<()> {
    let url = config::database_url()?;
    let store = MysqlStore::connect(&url)?;
    log::info!("Connected to database");

    // `store` drops on both paths out of here, closing the connection.
    seed::run_seed(&store)?;
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    config::init_logger();

    if let Err(err) = run() {
        eprintln!("{}", seed::failure_report(&err));
        process::exit(1);
    }
}
