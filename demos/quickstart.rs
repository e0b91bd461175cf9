use chrono::Utc;
use scaliger::{CivilDateTime, CyclePosition, JulianDay};

fn main() {
    let now = JulianDay::from_utc(Utc::now());
    println!("{now}");
    println!("JDN: {}", now.day_number());
    println!("Civil: {}", now.to_civil());

    let today = now.to_civil();
    let cycles = CyclePosition::of_year(today.year);
    println!(
        "Year {}: solar {}, lunar {}, indiction {}, Julian Period year {}",
        today.year, cycles.solar, cycles.lunar, cycles.indiction, cycles.julian_period
    );

    // A date-only input defaults to noon UT.
    let epoch = CivilDateTime::from_ymd(-4712, 1, 1).to_julian_day();
    println!("Julian Period epoch: JD {}", epoch.julian_day.value());
}
