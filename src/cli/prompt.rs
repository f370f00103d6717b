use anyhow::{bail, Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

use graham_hull::data::{Point, PolygonConvex};
use graham_hull::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
  Clockwise,
  CounterClockwise,
}

/// Interactive question/answer session over a pair of streams.
///
/// Input is split into whitespace separated tokens, so answers may be given
/// one per line or several on the same line.
pub struct Prompt<R, W> {
  input: R,
  output: W,
  tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
  pub fn new(input: R, output: W) -> Prompt<R, W> {
    Prompt {
      input,
      output,
      tokens: VecDeque::new(),
    }
  }

  fn next_token(&mut self) -> Result<Option<String>> {
    while self.tokens.is_empty() {
      let mut line = String::new();
      let read = self
        .input
        .read_line(&mut line)
        .context("failed to read input")?;
      if read == 0 {
        return Ok(None);
      }
      self.tokens.extend(line.split_whitespace().map(String::from));
    }
    Ok(self.tokens.pop_front())
  }

  // Repeat `question` until `accept` takes the answer.
  fn ask<V, F>(&mut self, question: &str, accept: F) -> Result<V>
  where
    F: Fn(&str) -> Result<V, String>,
  {
    loop {
      write!(self.output, "{}", question)?;
      self.output.flush()?;
      let token = match self.next_token()? {
        Some(token) => token,
        None => bail!("input ended while waiting for an answer to {:?}", question.trim()),
      };
      match accept(&token) {
        Ok(value) => return Ok(value),
        Err(reason) => {
          log::warn!("rejected {:?}: {}", token, reason);
          writeln!(self.output, "{}", reason)?;
        }
      }
    }
  }

  pub fn read_points(&mut self) -> Result<Vec<Point<i32>>> {
    let n = self.ask("Enter the number of points (at least 3): ", parse_count)?;
    writeln!(self.output, "Enter {} points", n)?;
    let mut pts = Vec::with_capacity(n.min(1 << 16));
    for i in 0..n {
      let x = self.ask(&format!("Q[{}].x = ", i), parse_coordinate)?;
      let y = self.ask(&format!("Q[{}].y = ", i), parse_coordinate)?;
      pts.push(Point::new([x, y]));
    }
    Ok(pts)
  }

  pub fn report(
    &mut self,
    hull: &Result<PolygonConvex<i32>, Error>,
    winding: Winding,
  ) -> Result<()> {
    match hull {
      Ok(hull) => {
        writeln!(self.output, "The convex hull consists of the following points:")?;
        let vertices: Vec<&Point<i32>> = match winding {
          Winding::Clockwise => hull.iter_cw().collect(),
          Winding::CounterClockwise => hull.iter().collect(),
        };
        for pt in vertices {
          writeln!(self.output, "{}", pt)?;
        }
      }
      Err(err) => writeln!(self.output, "Cannot compute a convex hull: {}", err)?,
    }
    self.output.flush()?;
    Ok(())
  }
}

fn parse_count(token: &str) -> Result<usize, String> {
  match token.parse::<i64>() {
    Ok(n) if n >= 3 => usize::try_from(n).map_err(|_| format!("{} points is too many", n)),
    Ok(_) => Err("At least 3 points are required.".to_string()),
    Err(_) => Err(format!("'{}' is not a whole number.", token)),
  }
}

fn parse_coordinate(token: &str) -> Result<i32, String> {
  token
    .parse::<i32>()
    .map_err(|_| format!("'{}' is not a valid coordinate.", token))
}

#[cfg(test)]
mod tests {
  use super::*;
  use graham_hull::convex_hull;
  use std::io::Cursor;

  fn session(input: &str, winding: Winding) -> Result<String> {
    let mut output = Vec::new();
    {
      let mut prompt = Prompt::new(Cursor::new(input), &mut output);
      let pts = prompt.read_points()?;
      prompt.report(&convex_hull(pts), winding)?;
    }
    Ok(String::from_utf8(output)?)
  }

  #[test]
  fn scenario_clockwise() -> Result<()> {
    let out = session("8\n0 3\n1 1\n2 2\n4 4\n0 0\n1 2\n3 1\n3 3\n", Winding::Clockwise)?;
    assert!(out.starts_with("Enter the number of points (at least 3): Enter 8 points\nQ[0].x = "));
    assert!(out.ends_with(
      "The convex hull consists of the following points:\n(0, 0)\n(0, 3)\n(4, 4)\n(3, 1)\n"
    ));
    Ok(())
  }

  #[test]
  fn counter_clockwise() -> Result<()> {
    let out = session("3 0 0 2 0 0 2", Winding::CounterClockwise)?;
    assert!(out.ends_with("points:\n(0, 0)\n(2, 0)\n(0, 2)\n"));
    Ok(())
  }

  #[test]
  fn retries_point_count() -> Result<()> {
    let out = session("2\nabc\n-4\n3\n0 0\n1 0\n0 1\n", Winding::Clockwise)?;
    let prompts = out
      .matches("Enter the number of points (at least 3): ")
      .count();
    assert_eq!(prompts, 4);
    assert!(out.contains("'abc' is not a whole number."));
    assert!(out.contains("At least 3 points are required."));
    Ok(())
  }

  #[test]
  fn retries_coordinate() -> Result<()> {
    let out = session("3\n0 x 0\n1 0\n0 1\n", Winding::Clockwise)?;
    assert!(out.contains("Q[0].y = 'x' is not a valid coordinate.\nQ[0].y = "));
    assert!(out.ends_with("(0, 0)\n(0, 1)\n(1, 0)\n"));
    Ok(())
  }

  #[test]
  fn degenerate_message() -> Result<()> {
    let out = session("4\n0 0\n1 1\n2 2\n3 3\n", Winding::Clockwise)?;
    assert!(out.ends_with(
      "Cannot compute a convex hull: all points are colinear \
       (2 distinct point(s) left after compaction)\n"
    ));
    Ok(())
  }

  #[test]
  fn early_end_of_input() {
    assert!(session("3\n0 0\n1", Winding::Clockwise).is_err());
    assert!(session("", Winding::Clockwise).is_err());
  }
}
