use athan::{AsrJuristic, CalculationMethod, CalendarDate, Location, PrayerCalculator};
use chrono::{Local, Timelike};

fn main() {
    env_logger::init();

    let now = Local::now();
    let date = CalendarDate::from(now.date_naive());
    println!("Current date: {date}");
    println!(
        "Current time: {:02}:{:02}:{:02}\n",
        now.hour(),
        now.minute(),
        now.second()
    );

    let calc = PrayerCalculator::with_method(
        Location::MAKKAH,
        CalculationMethod::Makkah,
        AsrJuristic::Standard,
    );
    match calc.compute(date) {
        Ok(times) => println!("{times}"),
        Err(err) => eprintln!("error: {err}"),
    }
}
