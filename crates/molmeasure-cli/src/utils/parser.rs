use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid point '{0}'. Expected three comma-separated numbers (e.g., '0.0,1.5,-2').")]
    InvalidPointFormat(String),

    #[error("Invalid {axis} coordinate '{value}' in point '{point}'.")]
    InvalidCoordinate {
        axis: char,
        value: String,
        point: String,
    },
}

/// Parses a point written as `x,y,z`. Whitespace around each component is ignored.
pub fn parse_point(s: &str) -> Result<Point3<f64>, ParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(ParseError::InvalidPointFormat(s.to_string()));
    };

    let coordinate = |value: &str, axis: char| -> Result<f64, ParseError> {
        value.parse().map_err(|_| ParseError::InvalidCoordinate {
            axis,
            value: value.to_string(),
            point: s.to_string(),
        })
    };

    Ok(Point3::new(
        coordinate(x, 'x')?,
        coordinate(y, 'y')?,
        coordinate(z, 'z')?,
    ))
}
