use crate::cli::{AngleArgs, DistanceArgs};
use crate::error::Result;
use molmeasure::core::geometry::{calculate_angle, calculate_distance};
use tracing::debug;

pub fn run_distance(args: DistanceArgs) -> Result<()> {
    let distance = calculate_distance(&args.a, &args.b);
    debug!(a = ?args.a, b = ?args.b, distance, "Measured distance.");
    println!("{:.6}", distance);
    Ok(())
}

pub fn run_angle(args: AngleArgs) -> Result<()> {
    let angle = calculate_angle(&args.a, &args.vertex, &args.c, args.degrees)?;
    debug!(degrees = args.degrees, angle, "Measured angle.");
    println!("{:.6}", angle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use molmeasure::core::geometry::GeometryError;
    use nalgebra::Point3;

    #[test]
    fn angle_with_degenerate_arm_fails() {
        let args = AngleArgs {
            a: Point3::origin(),
            vertex: Point3::origin(),
            c: Point3::new(1.0, 0.0, 0.0),
            degrees: true,
        };
        assert!(matches!(
            run_angle(args),
            Err(CliError::Geometry(GeometryError::ZeroLengthVector { .. }))
        ));
    }

    #[test]
    fn distance_always_succeeds() {
        let args = DistanceArgs {
            a: Point3::origin(),
            b: Point3::new(3.0, 4.0, 0.0),
        };
        assert!(run_distance(args).is_ok());
    }
}
