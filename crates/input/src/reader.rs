//! Reading one turn's worth of input.

use std::io::BufRead;

use anyhow::Result;

use crate::map::normalize;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A non-empty, normalized line
    Text(String),
    /// The line was blank after trimming
    Empty,
    /// The input stream reached end of file
    Closed,
}

/// Read and normalize the next line from `reader`.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Line> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(Line::Closed);
    }
    let text = normalize(&buf);
    if text.is_empty() {
        Ok(Line::Empty)
    } else {
        Ok(Line::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order() {
        let mut input = Cursor::new("Down\n\n  left \n");
        assert_eq!(read_line(&mut input).unwrap(), Line::Text("down".into()));
        assert_eq!(read_line(&mut input).unwrap(), Line::Empty);
        assert_eq!(read_line(&mut input).unwrap(), Line::Text("left".into()));
        assert_eq!(read_line(&mut input).unwrap(), Line::Closed);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("right");
        assert_eq!(read_line(&mut input).unwrap(), Line::Text("right".into()));
        assert_eq!(read_line(&mut input).unwrap(), Line::Closed);
    }
}
