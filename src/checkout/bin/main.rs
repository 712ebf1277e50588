use tracing::info;
use lending::checkout::desk::run;
use lending::checkout::factory::create_console_lending_service;
use lending::core::domain::Configuration;
use lending::core::library::LibraryError;
use lending::utils::logging::setup_tracing;

fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let config = Configuration::new("main");
    let desk = create_console_lending_service(&config);
    run(desk.as_ref())?;

    info!(branch_id = config.branch_id.as_str(), "lending desk finished");
    Ok(())
}
