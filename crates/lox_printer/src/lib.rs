//! lox_printer: Parenthesized-prefix rendering of Lox syntax trees.
//!
//! Turns an expression or statement, and everything beneath it, into an
//! unambiguous s-expression-like string such as `(* (- 123) (group 45.67))`.
//! The output is meant for checking parser results and diffing trees in
//! tests. It is not a source formatter and does not parse back.

mod error;
mod render;

use std::fmt;
use std::io;

use lox_ast::node::{Expr, Stmt};
use lox_core::intern::StringInterner;

pub use error::PrintError;
pub use render::Node;
use render::Renderer;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Separator placed between top-level statements by `print_program`.
    pub new_line: String,
    /// Whether `print_program` ends non-empty output with `new_line`.
    pub trailing_newline: bool,
    /// Initial capacity of the output buffer, in bytes.
    pub capacity: usize,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            new_line: "\n".to_string(),
            trailing_newline: true,
            capacity: 256,
        }
    }
}

/// Renders nodes built against `interner`.
///
/// The printer never mutates the tree and keeps no state between calls, so one
/// printer can be shared across threads and used on the same tree repeatedly.
pub struct AstPrinter<'i> {
    interner: &'i StringInterner,
    options: PrinterOptions,
}

impl<'i> AstPrinter<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_options(interner, PrinterOptions::default())
    }

    pub fn with_options(interner: &'i StringInterner, options: PrinterOptions) -> Self {
        Self { interner, options }
    }

    /// Render a node of either family.
    pub fn print<'a>(&self, node: impl Into<Node<'a>>) -> String {
        let node = node.into();
        let mut output = String::with_capacity(self.options.capacity);
        // Writing to a String cannot fail.
        let _ = Renderer::new(self.interner, &mut output).render(node);
        log::trace!("rendered {} node into {} bytes", node.kind_name(), output.len());
        output
    }

    pub fn print_expr(&self, expr: &Expr<'_>) -> String {
        self.print(expr)
    }

    pub fn print_stmt(&self, stmt: &Stmt<'_>) -> String {
        self.print(stmt)
    }

    /// Render each top-level statement on its own line.
    pub fn print_program(&self, statements: &[Stmt<'_>]) -> String {
        let mut output = String::with_capacity(self.options.capacity);
        for (i, stmt) in statements.iter().enumerate() {
            if i > 0 {
                output.push_str(&self.options.new_line);
            }
            let _ = Renderer::new(self.interner, &mut output).render(Node::from(stmt));
        }
        if self.options.trailing_newline && !output.is_empty() {
            output.push_str(&self.options.new_line);
        }
        log::trace!(
            "rendered program of {} statements into {} bytes",
            statements.len(),
            output.len()
        );
        output
    }

    /// Stream the rendering of `node` into a text sink, without building the
    /// whole string first.
    pub fn write_to<'a, W>(&self, node: impl Into<Node<'a>>, out: &mut W) -> Result<(), PrintError>
    where
        W: fmt::Write + ?Sized,
    {
        Renderer::new(self.interner, out).render(node.into())?;
        Ok(())
    }

    /// Stream the rendering of `node` into a byte sink such as stdout.
    pub fn write_io<'a, W>(&self, node: impl Into<Node<'a>>, out: &mut W) -> Result<(), PrintError>
    where
        W: io::Write + ?Sized,
    {
        let mut adapter = IoAdapter { inner: out, error: None };
        let result = Renderer::new(self.interner, &mut adapter).render(node.into());
        result.map_err(|err| adapter.error.map_or(PrintError::Fmt(err), PrintError::Io))
    }
}

/// Bridges `fmt::Write` onto an `io::Write`, keeping the underlying io error.
struct IoAdapter<'w, W: io::Write + ?Sized> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
