use nalgebra::{Point3, Vector3};

pub fn displacement_rmsd(initial: &[Point3<f64>], current: &[Point3<f64>]) -> Option<f64> {
    if initial.len() != current.len() || initial.is_empty() {
        return None;
    }
    let n = initial.len() as f64;
    let squared_dist_sum: f64 = initial
        .iter()
        .zip(current.iter())
        .map(|(p1, p2)| (p2 - p1).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / points.len() as f64))
}

pub fn radius_of_gyration(points: &[Point3<f64>]) -> Option<f64> {
    let center = centroid(points)?;
    let n = points.len() as f64;
    let squared_dist_sum: f64 = points.iter().map(|p| (p - center).norm_squared()).sum();
    Some((squared_dist_sum / n).sqrt())
}
