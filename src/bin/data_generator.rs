use rand::Rng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const COUNTRIES: [(&str, &str, f64, f64); 6] = [
    // name, capital, latitude range
    ("Italy", "Rome", 36.6, 47.1),
    ("Sweden", "Stockholm", 55.3, 69.1),
    ("Norway", "Oslo", 57.9, 71.2),
    ("Spain", "Madrid", 36.0, 43.8),
    ("France", "Paris", 42.3, 51.1),
    ("Germany", "Berlin", 47.3, 55.1),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "data/generated".to_string());
    let rows: usize = match std::env::args().nth(2) {
        Some(n) => n.parse()?,
        None => 100_000,
    };
    let dir = Path::new(&dir);
    fs::create_dir_all(dir)?;

    let mut rng = rand::rng();

    let mut countries = BufWriter::new(File::create(dir.join("Countries.csv"))?);
    writeln!(countries, "country,capital,population")?;
    for (name, capital, _, _) in COUNTRIES {
        let population = rng.random_range(1_000_000..90_000_000);
        writeln!(countries, "{},{},{}", name, capital, population)?;
    }
    countries.flush()?;

    let mut cities = BufWriter::new(File::create(dir.join("Cities.csv"))?);
    writeln!(cities, "city,country,latitude,longitude,temperature")?;
    for i in 0..rows {
        let (country, _, lat_lo, lat_hi) = COUNTRIES[rng.random_range(0..COUNTRIES.len())];
        let latitude = rng.random_range(lat_lo..lat_hi);
        let longitude = rng.random_range(-9.0..30.0);

        // some cells are left unusable so the numeric filter has work to do
        let temperature = match rng.random_range(0..50) {
            0 => String::new(),
            1 => "n/a".to_string(),
            _ => format!("{:.1}", rng.random_range(0.0..30.0)),
        };

        writeln!(
            cities,
            "City{},{},{:.4},{:.4},{}",
            i, country, latitude, longitude, temperature
        )?;
    }
    cities.flush()?;

    println!("Sample CSVs generated in {}", dir.display());
    Ok(())
}
