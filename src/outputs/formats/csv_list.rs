use std::io;

use crate::{ListFormat, TriangulationError, ListBuilder, Triangle};

/// A [ListFormat] which writes each triangle as three `x,y` lines followed by an empty line
#[derive(Debug)]
pub struct CsvListFormat<W: io::Write> {
    writer: W,
}

impl<W: io::Write> CsvListFormat<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: io::Write> ListFormat for CsvListFormat<W> {
    type Builder = CsvListBuilder<W>;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as ListBuilder>::Error> {
        Ok(CsvListBuilder { writer: self.writer })
    }
}

pub struct CsvListBuilder<W: io::Write> {
    writer: W,
}

impl<W: io::Write> ListBuilder for CsvListBuilder<W> {
    type Output = W;
    type Error = io::Error;

    fn add_triangle(&mut self, triangle: &Triangle) -> Result<(), Self::Error> {
        for [x, y] in triangle.vertices {
            writeln!(self.writer, "{},{}", x, y)?;
        }
        writeln!(self.writer)
    }

    fn build(mut self) -> Result<Self::Output, Self::Error> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn fail(mut self, _error: &TriangulationError<Self::Error>) {
        // Lines already written can't be taken back
        let _ = self.writer.flush();
    }
}
