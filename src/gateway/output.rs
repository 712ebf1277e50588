use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use crate::core::library::LibraryResult;

// OutputChannel is the ordered stream of human-readable lines shown to the desk operator
pub trait OutputChannel {
    fn emit(&self, line: &str) -> LibraryResult<()>;
}

#[derive(Debug, Default)]
pub struct ConsoleOutput {}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self {}
    }
}

impl OutputChannel for ConsoleOutput {
    fn emit(&self, line: &str) -> LibraryResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

// MemoryOutput records emitted lines; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl OutputChannel for MemoryOutput {
    fn emit(&self, line: &str) -> LibraryResult<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::output::{ConsoleOutput, MemoryOutput, OutputChannel};

    #[test]
    fn test_should_record_lines_in_order() {
        let output = MemoryOutput::new();
        let observer = output.clone();
        output.emit("first").expect("should emit");
        output.emit("second").expect("should emit");
        assert_eq!(vec!["first".to_string(), "second".to_string()], observer.lines());
        observer.clear();
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_should_write_to_console() {
        assert!(ConsoleOutput::new().emit("console line").is_ok());
    }
}
