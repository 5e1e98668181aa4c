use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, info};

use crate::error::SimError;
use crate::queues::event::Event;

/// Reads `<time> <size>` arrival records from one or more traces. Ids are handed
/// out in read order across every source pushed into the same generator.
#[derive(Default)]
pub struct TraceGenerator {
    arrivals: Vec<Event>,
    next_id: u64,
}

impl TraceGenerator {
    pub fn new() -> Self {
        TraceGenerator::default()
    }

    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, SimError> {
        let mut ret = TraceGenerator::new();
        for path in paths {
            ret.push_file(path.as_ref())?;
        }
        Ok(ret)
    }

    pub fn push_file(&mut self, path: &Path) -> Result<usize, SimError> {
        let file = File::open(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let read = self.push_reader(BufReader::new(file), &path.display().to_string())?;
        info!(trace = %path.display(), records = read, "loaded trace");
        Ok(read)
    }

    /// Returns the number of records read from `reader`.
    pub fn push_reader<R: BufRead>(&mut self, reader: R, source_name: &str) -> Result<usize, SimError> {
        let mut read = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| match source.kind() {
                ErrorKind::InvalidData => SimError::MalformedTrace {
                    source_name: source_name.to_owned(),
                    line: index + 1,
                    reason: "line is not valid UTF-8".to_owned(),
                },
                _ => SimError::Io { path: source_name.into(), source },
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let (time, size) = parse_record(&line).map_err(|reason| SimError::MalformedTrace {
                source_name: source_name.to_owned(),
                line: index + 1,
                reason,
            })?;
            let event = Event::arrival(self.next_id, time, size).map_err(|e| SimError::MalformedTrace {
                source_name: source_name.to_owned(),
                line: index + 1,
                reason: e.to_string(),
            })?;
            debug!(id = self.next_id, time, size, "arrival record");

            self.next_id += 1;
            self.arrivals.push(event);
            read += 1;
        }
        Ok(read)
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    pub fn into_arrivals(self) -> Vec<Event> {
        self.arrivals
    }
}

fn parse_record(line: &str) -> Result<(f64, u64), String> {
    let mut fields = line.split_whitespace();
    let time = match fields.next() {
        Some(s) => s.parse::<f64>().map_err(|e| format!("bad arrival time {:?}: {}", s, e))?,
        None => return Err("missing arrival time".to_owned()),
    };
    let size = match fields.next() {
        Some(s) => s.parse::<u64>().map_err(|e| format!("bad packet size {:?}: {}", s, e))?,
        None => return Err("missing packet size".to_owned()),
    };
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected trailing field {:?}", extra));
    }
    Ok((time, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn assigns_ids_in_read_order_across_sources() {
        let mut gen = TraceGenerator::new();
        gen.push_reader(Cursor::new("0.5 100\n0.1 200\n"), "first").unwrap();
        gen.push_reader(Cursor::new("\n0.0\t300\n   \n"), "second").unwrap();

        let arrivals = gen.into_arrivals();
        let ids: Vec<u64> = arrivals.iter().map(Event::get_id).collect();
        let sizes: Vec<u64> = arrivals.iter().map(Event::get_size).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(sizes, vec![100, 200, 300]);
        assert_eq!(arrivals[2].get_time(), 0.0);
    }

    #[test]
    fn malformed_lines_are_fatal_with_location() {
        let cases = ["abc 100", "1.0", "1.0 -5", "1.0 12.5", "1.0 100 7", "-1.0 100", "1.0 0", "NaN 10"];
        for case in cases.iter() {
            let input = format!("0.0 10\n{}\n", case);
            let err = TraceGenerator::new()
                .push_reader(Cursor::new(input), "trace.txt")
                .unwrap_err();
            match err {
                SimError::MalformedTrace { source_name, line, .. } => {
                    assert_eq!(source_name, "trace.txt");
                    assert_eq!(line, 2, "case {:?}", case);
                }
                other => panic!("unexpected error for {:?}: {}", case, other),
            }
        }
    }

    #[test]
    fn invalid_utf8_is_a_malformed_line() {
        let input: &[u8] = b"0.0 10\n1.0 \xff\xfe\n";
        let err = TraceGenerator::new().push_reader(Cursor::new(input), "bytes").unwrap_err();
        match err {
            SimError::MalformedTrace { source_name, line, .. } => {
                assert_eq!(source_name, "bytes");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = TraceGenerator::from_files(&["/nonexistent/link_sim/trace"]).err().unwrap();
        assert!(matches!(err, SimError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/link_sim/trace"));
    }
}
