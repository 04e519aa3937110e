use clap::{Parser, Subcommand};
use yandex_weather::{Client, Config, format_current, translate_condition};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "yandex-weather", version, about = "Yandex.Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Yandex.Weather API key used for requests.
    Configure,

    /// Show current conditions for a pair of coordinates.
    Current {
        /// Latitude in degrees.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Response language, e.g. "ru_RU" or "en_US".
        #[arg(long, default_value = "ru_RU")]
        lang: String,
    },

    /// Show a multi-day forecast.
    Forecast {
        /// Latitude in degrees.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Number of forecast days (the API accepts 1-7).
        #[arg(long, default_value_t = 3)]
        days: u32,

        /// Request the hourly breakdown as well.
        #[arg(long)]
        hours: bool,

        /// Response language, e.g. "ru_RU" or "en_US".
        #[arg(long, default_value = "ru_RU")]
        lang: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Current { lat, lon, lang } => {
                let client = client_from_config()?;
                let response = client.get_current(lat, lon, &lang).await?;
                print!("{}", format_current(Some(&response), &lang));
                Ok(())
            }
            Command::Forecast {
                lat,
                lon,
                days,
                hours,
                lang,
            } => {
                let client = client_from_config()?;
                let response = client.get_forecast(lat, lon, &lang, days, hours).await?;
                print_forecast(&response, &lang);
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("Yandex.Weather API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn client_from_config() -> anyhow::Result<Client> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?;
    Ok(Client::new(api_key)?)
}

fn print_forecast(response: &yandex_weather::WeatherResponse, lang: &str) {
    print!("{}", format_current(Some(response), lang));

    let russian = lang == "ru_RU" || lang.is_empty();
    let condition = |code: &str| {
        if russian {
            translate_condition(code).to_string()
        } else {
            code.to_string()
        }
    };

    if russian {
        println!("\nПрогноз на {} дн.:", response.forecasts.len());
    } else {
        println!("\nForecast for {} day(s):", response.forecasts.len());
    }

    for (i, day) in response.forecasts.iter().enumerate() {
        if russian {
            println!("\nДень {} ({}):", i + 1, day.date);
            println!(
                "Температура днем: {}°C, {}",
                day.parts.day.temp_avg,
                condition(&day.parts.day.condition)
            );
            println!(
                "Температура ночью: {}°C, {}",
                day.parts.night.temp_avg,
                condition(&day.parts.night.condition)
            );
        } else {
            println!("\nDay {} ({}):", i + 1, day.date);
            println!(
                "Daytime: {}°C, {}",
                day.parts.day.temp_avg,
                condition(&day.parts.day.condition)
            );
            println!(
                "Night: {}°C, {}",
                day.parts.night.temp_avg,
                condition(&day.parts.night.condition)
            );
        }
    }
}
