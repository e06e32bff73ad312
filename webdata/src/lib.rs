pub mod models;
pub mod sheets;
pub mod site;

#[cfg(feature = "native")]
pub use native::init_tracing;

#[cfg(feature = "native")]
mod native {
    use std::io::{BufWriter, Write};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

    struct FlushingWriter(BufWriter<std::fs::File>);

    impl Write for FlushingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let res = self.0.write(buf);
            self.0.flush()?;
            res
        }
        fn flush(&mut self) -> std::io::Result<()> {
            self.0.flush()
        }
    }

    /// Holds the lock for one event.
    struct LockedWriter<'a>(std::sync::MutexGuard<'a, FlushingWriter>);

    impl Write for LockedWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            self.0.flush()
        }
    }

    struct SharedFlushingWriter(Arc<Mutex<FlushingWriter>>);

    impl<'a> MakeWriter<'a> for SharedFlushingWriter {
        type Writer = LockedWriter<'a>;
        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter(self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
        }
    }

    /// Logs to `log_path` (appending) and stdout. `RUST_LOG` adds directives
    /// on top of debug for this crate and the `sheets` binary.
    pub fn init_tracing(log_path: &str) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(log_path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let log_file = std::fs::OpenOptions::new().create(true).append(true).open(log_path)?;
        let shared_writer = SharedFlushingWriter(Arc::new(Mutex::new(FlushingWriter(BufWriter::new(log_file)))));

        tracing_subscriber::registry()
            .with(
                EnvFilter::from_default_env()
                    .add_directive("webdata=debug".parse()?)
                    .add_directive("sheets=debug".parse()?),
            )
            .with(fmt::layer().with_writer(shared_writer).with_ansi(false).compact())
            .with(fmt::layer().compact())
            .try_init()?;

        Ok(())
    }
}
