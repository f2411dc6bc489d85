use clap::Parser;
use env_logger::Env;
use fractal_pair::{
    BackendPreference, ColourMapKind, Complex, FormulaId, PpmFilePresenter, RenderPairController,
    Resolution, Session, SessionConfig, ViewKind, select_renderer,
};
use std::path::PathBuf;

/// Render a Mandelbrot view and its linked Julia view to PPM files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side length of both square images in pixels
    #[arg(short, long, default_value_t = 400)]
    resolution: u32,

    /// Iteration cap
    #[arg(short, long, default_value_t = 100)]
    iterations: u32,

    /// Iteration formula: standard, hyperbolic, cubic, quartic, burning_ship, or tricorn
    #[arg(short, long, default_value = "standard")]
    formula: FormulaId,

    /// Colour map: dark_red, aqua, or viridis
    #[arg(long, default_value = "dark_red")]
    colour_map: ColourMapKind,

    /// Julia parameter as RE,IM
    #[arg(short, long, value_parser = parse_complex, allow_hyphen_values = true)]
    c: Option<Complex>,

    /// Orbit pointer as RE,IM
    #[arg(short, long, value_parser = parse_complex, allow_hyphen_values = true)]
    z: Option<Complex>,

    /// Zoom factor applied to both views about the pointer, below 1 zooms in
    #[arg(long, value_parser = parse_zoom_factor)]
    zoom: Option<f64>,

    /// Rendering backend: cpu, parallel, or gpu
    #[arg(short, long, default_value = "cpu")]
    backend: BackendPreference,

    /// Directory receiving mandelbrot.ppm and julia.ppm
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,
}

fn parse_complex(value: &str) -> Result<Complex, String> {
    let (real, imag) = value
        .split_once(',')
        .ok_or_else(|| format!("expected RE,IM but got '{}'", value))?;

    let real = real.trim().parse::<f64>().map_err(|err| err.to_string())?;
    let imag = imag.trim().parse::<f64>().map_err(|err| err.to_string())?;
    let point = Complex::new(real, imag);

    if !point.is_finite() {
        return Err(format!("'{}' is not a finite complex number", value));
    }

    Ok(point)
}

fn parse_zoom_factor(value: &str) -> Result<f64, String> {
    let factor = value.trim().parse::<f64>().map_err(|err| err.to_string())?;

    if !factor.is_finite() || factor <= 0.0 {
        return Err(format!("zoom factor must be finite and positive, got '{}'", value));
    }

    Ok(factor)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let mut session = Session::new(SessionConfig {
        resolution: Resolution::new(cli.resolution)?,
        max_iterations: cli.iterations,
        formula: cli.formula,
        colour_map: cli.colour_map,
        backend: cli.backend,
        ..SessionConfig::default()
    })?;

    if let Some(c) = cli.c {
        session.set_c(c);
    }
    if let Some(z) = cli.z {
        session.set_z(z);
    }
    if let Some(factor) = cli.zoom {
        for &view in ViewKind::ALL {
            session.zoom_view(view, factor)?;
        }
    }

    log::info!(
        "{} formula, c = {}, z = {}, {} iterations",
        session.formula(),
        session.c(),
        session.z(),
        session.max_iterations()
    );

    std::fs::create_dir_all(&cli.output_dir)?;

    let mut controller =
        RenderPairController::new(PpmFilePresenter::new(), select_renderer(session.backend()));

    controller.generate(&session)?;

    for path in controller.write(&cli.output_dir)? {
        println!("Saved {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complex() {
        assert_eq!(parse_complex("-0.8, 0.156"), Ok(Complex::new(-0.8, 0.156)));
    }

    #[test]
    fn test_parse_complex_rejects_missing_separator() {
        assert!(parse_complex("0.5").is_err());
        assert!(parse_complex("a,1").is_err());
    }

    #[test]
    fn test_parse_complex_rejects_non_finite_values() {
        assert!(parse_complex("nan,0").is_err());
        assert!(parse_complex("inf,1").is_err());
        assert!(parse_complex("0,-inf").is_err());
    }

    #[test]
    fn test_parse_zoom_factor() {
        assert_eq!(parse_zoom_factor("0.5"), Ok(0.5));
        assert!(parse_zoom_factor("inf").is_err());
        assert!(parse_zoom_factor("nan").is_err());
        assert!(parse_zoom_factor("0").is_err());
        assert!(parse_zoom_factor("-2").is_err());
    }

    #[test]
    fn test_cli_rejects_non_finite_arguments() {
        assert!(Cli::try_parse_from(["fractal_pair", "--c", "nan,inf"]).is_err());
        assert!(Cli::try_parse_from(["fractal_pair", "--z", "inf,1"]).is_err());
        assert!(Cli::try_parse_from(["fractal_pair", "--zoom", "inf"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["fractal_pair"]).unwrap();

        assert_eq!(cli.resolution, 400);
        assert_eq!(cli.iterations, 100);
        assert_eq!(cli.formula, FormulaId::Standard);
        assert_eq!(cli.colour_map, ColourMapKind::DarkRed);
        assert_eq!(cli.backend, BackendPreference::Cpu);
        assert!(cli.c.is_none());
    }

    #[test]
    fn test_cli_parses_negative_parameter() {
        let cli = Cli::try_parse_from(["fractal_pair", "--c", "-0.8,0.156", "--formula", "burning-ship"])
            .unwrap();

        assert_eq!(cli.c, Some(Complex::new(-0.8, 0.156)));
        assert_eq!(cli.formula, FormulaId::BurningShip);
    }
}
