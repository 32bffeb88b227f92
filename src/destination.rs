use std::{
    fs::File,
    io::{self, Write},
};

pub type CreateDestination = fn(&str) -> io::Result<File>;

/// Default strategy: create the file, truncating any existing one.
pub fn create_file(path: &str) -> io::Result<File> {
    File::create(path)
}

/// Sink wrapper that stops touching the destination after its first error.
///
/// Every later `write` or `flush` fails with the same kind and message, so
/// bytes still buffered by the serializer are never handed over again.
pub(crate) struct FusedSink<W> {
    inner: W,
    failed: Option<(io::ErrorKind, String)>,
}

impl<W: Write> FusedSink<W> {
    pub(crate) fn new(inner: W) -> FusedSink<W> {
        Self {
            inner,
            failed: None,
        }
    }

    fn check(&self) -> io::Result<()> {
        match &self.failed {
            Some((kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Ok(()),
        }
    }

    fn fuse<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        if let Err(err) = &result {
            if err.kind() != io::ErrorKind::Interrupted {
                self.failed = Some((err.kind(), err.to_string()));
            }
        }
        result
    }
}

impl<W: Write> Write for FusedSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check()?;
        let result = self.inner.write(buf);
        self.fuse(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check()?;
        let result = self.inner.flush();
        self.fuse(result)
    }
}
