//! Grid clustering over a handful of European cities at two zoom levels.

use shoal::cluster::{Algorithm, AlgorithmInput, GridAlgorithm, Marker, NoopAlgorithm};
use shoal::geo::{LatLng, LatLngBounds};
use shoal::map::{MapView, WebMercator};

#[derive(Debug, Clone)]
struct City {
    name: &'static str,
    position: LatLng,
}

impl Marker for City {
    fn position(&self) -> LatLng {
        self.position
    }
}

fn city(name: &'static str, lat: f64, lng: f64) -> City {
    City {
        name,
        position: LatLng::new(lat, lng),
    }
}

fn print_clusters(label: &str, clusters: &[shoal::cluster::Cluster<City>]) {
    println!("=== {label} ===");
    for (i, cluster) in clusters.iter().enumerate() {
        let names: Vec<&str> = cluster.markers().iter().map(|c| c.name).collect();
        println!(
            "  cluster {:2} ({:7.3}, {:7.3}) => {}",
            i,
            cluster.position().lat,
            cluster.position().lng,
            names.join(", ")
        );
    }
}

fn main() {
    let cities = vec![
        // Rhine-Ruhr area
        city("Cologne", 50.938, 6.960),
        city("Duesseldorf", 51.228, 6.773),
        city("Dortmund", 51.514, 7.466),
        // Benelux
        city("Amsterdam", 52.373, 4.893),
        city("Brussels", 50.847, 4.352),
        // Standalone
        city("Paris", 48.857, 2.352),
        city("Berlin", 52.520, 13.405),
    ];

    let bounds = LatLngBounds::new(LatLng::new(45.0, -5.0), LatLng::new(55.0, 16.0));

    // --- Grid clustering at a country-level zoom ---
    let view = MapView::new(6.0, bounds);
    let projection = WebMercator::new(6.0);
    let mut grid = GridAlgorithm::new().with_grid_size(60.0);
    let output = grid
        .calculate(AlgorithmInput {
            markers: &cities,
            map: &view,
            projection: &projection,
        })
        .unwrap();
    print_clusters("grid, zoom 6", &output.clusters);
    println!("  redraw: {}\n", output.change.should_redraw());

    // --- Same markers at street-level zoom: bypassed, one cluster each ---
    let view = MapView::new(16.0, bounds);
    let projection = WebMercator::new(16.0);
    let output = grid
        .calculate(AlgorithmInput {
            markers: &cities,
            map: &view,
            projection: &projection,
        })
        .unwrap();
    print_clusters("grid, zoom 16 (bypass)", &output.clusters);
    println!("  redraw: {}\n", output.change.should_redraw());

    // --- Clustering switched off entirely ---
    let mut off = NoopAlgorithm::new();
    let output = off
        .calculate(AlgorithmInput {
            markers: &cities,
            map: &view,
            projection: &projection,
        })
        .unwrap();
    print_clusters("noop", &output.clusters);
}
