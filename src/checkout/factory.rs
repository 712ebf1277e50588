use crate::checkout::domain::LendingService;
use crate::checkout::domain::service::LendingServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::output::{ConsoleOutput, OutputChannel};

pub fn create_lending_service(config: &Configuration, output: Box<dyn OutputChannel>) -> Box<dyn LendingService> {
    let publisher = create_publisher(config.publisher);
    Box::new(LendingServiceImpl::new(config, output, publisher))
}

pub fn create_console_lending_service(config: &Configuration) -> Box<dyn LendingService> {
    create_lending_service(config, Box::new(ConsoleOutput::new()))
}
