use std::{
    fs, io,
    num::ParseFloatError,
    path::{Path, PathBuf},
};

use glam::Vec3;
use thiserror::Error;

use crate::gfx::Vertex;

/// Number of whitespace separated fields per vertex: `x y z r g b`.
pub const FIELDS_PER_VERTEX: usize = 6;

const FIELD_NAMES: [&str; FIELDS_PER_VERTEX] = ["x", "y", "z", "r", "g", "b"];

#[derive(Debug, Error)]
pub enum VertexFileError {
    #[error("unable to read vertex file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: field `{field}` is not a number ({value:?}): {source}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: expected 6 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("requested {requested} vertices but the file only holds {available}")]
    NotEnoughVertices { requested: usize, available: usize },
}

fn parse_line(line_no: usize, line: &str) -> Result<Vertex, VertexFileError> {
    let mut values = [0f32; FIELDS_PER_VERTEX];
    let mut fields = line.split_whitespace();

    for (i, slot) in values.iter_mut().enumerate() {
        let Some(text) = fields.next() else {
            return Err(VertexFileError::MissingFields {
                line: line_no,
                found: i,
            });
        };
        *slot = text.parse().map_err(|source| VertexFileError::Parse {
            line: line_no,
            field: FIELD_NAMES[i],
            value: text.to_string(),
            source,
        })?;
    }

    let [x, y, z, r, g, b] = values;
    Ok(Vertex::new(Vec3::new(x, y, z), Vec3::new(r, g, b)))
}

/// Parses every vertex record in `text`.
///
/// Lines starting with `#` and blank lines are skipped. Fields past the sixth
/// are ignored. Line numbers in errors are 1-based.
pub fn parse_vertices(text: &str) -> Result<Vec<Vertex>, VertexFileError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.starts_with('#') && !line.trim().is_empty())
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

pub fn load_vertices(path: &Path) -> Result<Vec<Vertex>, VertexFileError> {
    let text = fs::read_to_string(path).map_err(|source| VertexFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vertices(&text)
}

/// Keeps the first `count` vertices.
pub fn take_vertices(
    mut verts: Vec<Vertex>,
    count: usize,
) -> Result<Vec<Vertex>, VertexFileError> {
    if count > verts.len() {
        return Err(VertexFileError::NotEnoughVertices {
            requested: count,
            available: verts.len(),
        });
    }
    verts.truncate(count);
    Ok(verts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYRAMID: &str = include_str!("../../assets/pyramid.txt");

    #[test]
    fn comment_lines_contribute_nothing() {
        let verts = parse_vertices("# comment\n1 2 3 0.1 0.2 0.3\n").unwrap();
        assert_eq!(verts.len(), 1);
        assert_eq!(verts[0].pos, [1.0, 2.0, 3.0]);
        assert_eq!(verts[0].clr, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn only_a_leading_hash_marks_a_comment() {
        let err = parse_vertices(" # indented\n").unwrap_err();
        assert!(matches!(err, VertexFileError::Parse { line: 1, field: "x", .. }));
    }

    #[test]
    fn blank_lines_and_extra_fields_are_tolerated() {
        let verts = parse_vertices("\n0 0 0 1 1 1 trailing\n\n1 1 1 0 0 0\n").unwrap();
        assert_eq!(verts.len(), 2);
        assert_eq!(verts[1].pos, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn bad_number_names_its_line() {
        let text = "# header\n0 0 0 1 1 1\n0 0 zero 1 1 1\n";
        match parse_vertices(text).unwrap_err() {
            VertexFileError::Parse { line, field, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "z");
                assert_eq!(value, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_line_reports_field_count() {
        let err = parse_vertices("1 2 3 4\n").unwrap_err();
        assert!(matches!(err, VertexFileError::MissingFields { line: 1, found: 4 }));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn bundled_pyramid_parses() {
        let verts = parse_vertices(PYRAMID).unwrap();
        assert_eq!(verts.len(), 12);
        assert_eq!(verts[0].pos, [-0.6, -0.4, 0.4]);
        assert_eq!(verts[11].clr, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("orbit_viewer_{}.txt", std::process::id()));
        fs::write(&path, "# tri\n0 0 0 1 0 0\n1 0 0 0 1 0\n0 1 0 0 0 1\n").unwrap();
        let verts = load_vertices(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[2].clr, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_vertices(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, VertexFileError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn take_truncates_or_fails() {
        let verts = parse_vertices(PYRAMID).unwrap();
        assert_eq!(take_vertices(verts.clone(), 9).unwrap().len(), 9);
        assert_eq!(take_vertices(verts.clone(), 0).unwrap().len(), 0);

        let err = take_vertices(verts, 40).unwrap_err();
        assert!(matches!(
            err,
            VertexFileError::NotEnoughVertices { requested: 40, available: 12 }
        ));
    }
}
