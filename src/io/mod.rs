//! Types for managing matrix output to various targets.
//!

use crate::algebra::{ScalarT, TriuMatrix};
use std::fs::File;
use std::io::{stdout, Error, ErrorKind, Result, Stdout, Write};

/// Container for managing multiple print targets
pub enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>), // Supports any stream that implements `Write`
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintTarget::Stdout(_) => write!(f, "PrintTarget::Stdout"),
            PrintTarget::File(_) => write!(f, "PrintTarget::File"),
            PrintTarget::Buffer(_) => write!(f, "PrintTarget::Buffer"),
            PrintTarget::Stream(_) => write!(f, "PrintTarget::Stream"),
        }
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Buffer(_) => Ok(()),
            PrintTarget::Stream(stream) => stream.flush(),
        }
    }
}

/// Trait implemented by types that allow configurable print targets
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// redirect print output to an internal buffer
    fn print_to_buffer(&mut self);
    /// get the contents of the internal print buffer
    fn get_print_buffer(&mut self) -> Result<String>;
    /// get the current print target
    fn print_target(&mut self) -> &dyn Write;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).to_string()),
            _ => Err(Error::new(
                ErrorKind::Other,
                "Print buffering is not configured.",
            )),
        }
    }

    fn print_target(&mut self) -> &dyn Write {
        self
    }
}

/// Writes matrices to a configurable print target.
///
/// When `verbose` is set each matrix is preceded by a header line
/// giving its dimensions.
///
/// ```
/// use utmatrix::algebra::TriuMatrix;
/// use utmatrix::io::{ConfigurablePrintTarget, MatrixPrinter};
///
/// let mut m = TriuMatrix::<i32>::new(2).unwrap();
/// m[0][1] = 3;
///
/// let mut printer = MatrixPrinter::new(false);
/// printer.print_to_buffer();
/// printer.print(&m).unwrap();
/// assert_eq!(printer.get_print_buffer().unwrap(), "[ 0 3 ]\n[ 0 0 ]\n");
/// ```
#[derive(Debug, Default)]
pub struct MatrixPrinter {
    pub verbose: bool,
    target: PrintTarget,
}

impl MatrixPrinter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            target: PrintTarget::default(),
        }
    }

    /// Print a matrix, preceded by a header line if verbose.
    pub fn print<T: ScalarT>(&mut self, m: &TriuMatrix<T>) -> Result<()> {
        if self.verbose {
            let n = m.size();
            writeln!(self.target, "TriuMatrix {}x{}", n, n)?;
        }
        write!(self.target, "{}", m)?;
        self.target.flush()
    }
}

impl ConfigurablePrintTarget for MatrixPrinter {
    fn print_to_stdout(&mut self) {
        self.target.print_to_stdout()
    }

    fn print_to_file(&mut self, file: File) {
        self.target.print_to_file(file)
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.target.print_to_stream(stream)
    }

    fn print_to_buffer(&mut self) {
        self.target.print_to_buffer()
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        self.target.get_print_buffer()
    }

    fn print_target(&mut self) -> &dyn Write {
        self.target.print_target()
    }
}
