//! Consumer that prints one `owner repo branch commit` line per event.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use events::Event;
use listener::{EventHandler, HandlerError};

pub struct PrintHandler<W> {
    out: Mutex<W>,
}

impl PrintHandler<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send + 'static> PrintHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl<W: Write + Send + 'static> EventHandler for PrintHandler<W> {
    async fn handle(&self, event: Event) -> Result<(), HandlerError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| HandlerError::new("output lock poisoned"))?;
        writeln!(out, "{}", event.summary())
            .and_then(|()| out.flush())
            .map_err(|err| HandlerError::new(err.to_string()))
    }
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
