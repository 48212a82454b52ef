use clap::Parser;
use fishcast_core::{
    assess, assess_series, ForecastSummary, SeaStatePreset, SuitabilityAssessment,
    SuitabilityLabel, WeatherObservation,
};
use tracing_subscriber::EnvFilter;

/// Fishing-conditions assessment demo with configurable inputs
#[derive(Parser, Debug)]
#[command(name = "fishcast-demo")]
#[command(about = "Marine fishing-conditions assessment demo", long_about = None)]
struct Args {
    /// Wave height in meters
    #[arg(short = 'w', long, default_value_t = 1.0)]
    wave: f32,

    /// Wind speed in knots
    #[arg(short = 's', long, default_value_t = 12.0)]
    wind: f32,

    /// Water temperature in °C
    #[arg(short = 't', long, default_value_t = 20.0)]
    temperature: f32,

    /// Observation timestamp (unix seconds)
    #[arg(long, default_value_t = 0)]
    observed_at: i64,

    /// Generate a synthetic forecast from a sea-state preset
    /// (calm, moderate, rough, storm)
    #[arg(short = 'p', long)]
    preset: Option<String>,

    /// Forecast length in hours (preset mode)
    #[arg(long, default_value_t = 12)]
    hours: usize,

    /// RNG seed for the synthetic forecast (preset mode)
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Fishcast Demo ===\n");

    if let Some(name) = &args.preset {
        let preset = match name.to_lowercase().as_str() {
            "calm" => SeaStatePreset::calm(),
            "moderate" => SeaStatePreset::moderate(),
            "rough" => SeaStatePreset::rough(),
            "storm" => SeaStatePreset::storm(),
            other => {
                eprintln!("Unknown preset '{other}', using moderate");
                SeaStatePreset::moderate()
            }
        };
        run_forecast(&preset, args.hours, args.observed_at, args.seed);
    } else {
        let observation =
            WeatherObservation::new(args.wave, args.wind, args.temperature, args.observed_at);
        print_assessment(&observation, &assess(&observation));
    }
}

fn print_assessment(observation: &WeatherObservation, report: &SuitabilityAssessment) {
    println!(
        "Observation: waves {}, wind {}, water {}",
        observation.wave_height, observation.wind_speed, observation.water_temperature
    );
    println!("Score:          {}/100 ({})", report.score, report.label);
    println!("Summary:        {}", report.summary);
    println!("Recommendation: {}", report.recommendation);
    if report.suggested_species.is_empty() {
        println!("Species:        none suggested");
    } else {
        let names: Vec<&str> = report.suggested_species.iter().map(|s| s.name()).collect();
        println!("Species:        {}", names.join(", "));
    }
    if let Some(warning) = report.safety_warning {
        println!("WARNING:        {warning}");
    }
}

fn run_forecast(preset: &SeaStatePreset, hours: usize, start_at: i64, seed: u64) {
    println!(
        "Preset: {} ({} hour forecast, seed {seed})\n",
        preset.name, hours
    );

    let series = preset.synthetic_series(hours, start_at, seed);
    let assessments = assess_series(&series);

    println!("hour   waves     wind      water     score  label       warning");
    for (hour, (observation, report)) in series.iter().zip(&assessments).enumerate() {
        let warning = report
            .safety_warning
            .map_or(String::new(), |w| w.to_string());
        // Pad pre-rendered strings; the unit Display impls ignore width
        let waves = observation.wave_height.to_string();
        let wind = observation.wind_speed.to_string();
        let water = observation.water_temperature.to_string();
        let label = report.label.to_string();
        println!(
            "{hour:>4}   {waves:<9} {wind:<9} {water:<9} {score:>5}  {label:<11} {warning}",
            score = report.score,
        );
    }

    let summary = ForecastSummary::from_assessments(&assessments);
    println!("\n=== Summary ===");
    for label in [
        SuitabilityLabel::Excellent,
        SuitabilityLabel::Good,
        SuitabilityLabel::Fair,
        SuitabilityLabel::Poor,
        SuitabilityLabel::Hazardous,
    ] {
        let count = summary.count_for(label);
        if count > 0 {
            println!("{label:<11} {count} h");
        }
    }
    println!("hazard hours: {}", summary.hazard_hours);
    if let Some(best) = summary.best_index {
        println!(
            "best window:  hour {best} (score {}, {})",
            assessments[best].score, assessments[best].label
        );
    }
}
