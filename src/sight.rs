use clap::Parser;

use sky_compass::{
    angle_between_coordinates, bearing_between_coordinates, cardinal_from_angle,
    distance_between_coordinates, elevation_angle,
};

#[derive(Parser, Debug)]
#[clap(version, about = "distance and compass bearing between two points on Earth")]
struct Args {
    /// whether to be verbose
    #[arg(short = 'v')]
    verbose: bool,

    #[arg(long = "lat1")]
    lat1: f64,
    #[arg(long = "long1")]
    long1: f64,
    #[arg(long = "lat2")]
    lat2: f64,
    #[arg(long = "long2")]
    long2: f64,

    /// altitude in km of an object above the second point
    #[arg(long = "alt", short = 'a')]
    alt: Option<f64>,
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        println!("DEBUG {args:?}");
    }

    let distance = distance_between_coordinates(args.lat1, args.long1, args.lat2, args.long2)
        .expect("bad coordinates");
    let bearing = bearing_between_coordinates(args.lat1, args.long1, args.lat2, args.long2)
        .expect("bad coordinates");
    let cardinal = cardinal_from_angle(bearing).expect("bad bearing");

    println!("DISTANCE: {distance:.2} km");
    println!("BEARING: {bearing:.2} degrees, look to the ({cardinal})");
    if let Some(alt) = args.alt {
        let angle = angle_between_coordinates(args.lat1, args.long1, args.lat2, args.long2)
            .expect("bad coordinates");
        println!("ELEVATION: {:.2} degrees", elevation_angle(angle, alt));
    }
}
