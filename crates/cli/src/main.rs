use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use support_polygon::prelude::Vec3;
use support_polygon::sample::foot_rectangles;
use support_polygon::{support_constraints, ConstraintSystem, HullCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Support-polygon constraint runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Overrides applied on top of the defaults or a `--config` file.
#[derive(clap::Args, Clone, Debug, Default)]
struct CfgArgs {
    /// JSON file with `HullCfg` fields (missing fields keep defaults)
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    margin: Option<f64>,
    #[arg(long)]
    ransac_threshold: Option<f64>,
}

#[derive(Subcommand)]
enum Action {
    /// Read contact points (CSV columns x, y and optional z) and write A, b as JSON
    Constraints {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        cfg: CfgArgs,
    },
    /// Run a synthetic two-foot stance and print A, b to stdout
    Demo {
        #[arg(long, default_value_t = 0.05)]
        half_width: f64,
        #[arg(long, default_value_t = 0.1)]
        half_length: f64,
        #[arg(long, default_value_t = 0.2)]
        stance: f64,
        #[command(flatten)]
        cfg: CfgArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Serialized constraint system: row `i` reads `a[i]·(x, y) <= b[i]`.
#[derive(Debug, Serialize)]
struct ConstraintsOut {
    rows: usize,
    a: Vec<[f64; 2]>,
    b: Vec<f64>,
    cfg: HullCfg,
}

impl ConstraintsOut {
    fn new(sys: &ConstraintSystem, cfg: HullCfg) -> Self {
        Self {
            rows: sys.len(),
            a: sys.rows().map(|h| [h.n.x, h.n.y]).collect(),
            b: sys.rows().map(|h| h.c).collect(),
            cfg,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Constraints { input, out, cfg } => constraints(input, out, &cfg),
        Action::Demo {
            half_width,
            half_length,
            stance,
            cfg,
        } => demo(half_width, half_length, stance, &cfg),
        Action::Report => report(),
    }
}

fn load_cfg(args: &CfgArgs) -> Result<HullCfg> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = std::fs::read(path).with_context(|| format!("reading config {path}"))?;
            serde_json::from_slice::<HullCfg>(&raw)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => HullCfg::default(),
    };
    if let Some(m) = args.margin {
        cfg.boundary_margin = m;
    }
    if let Some(t) = args.ransac_threshold {
        cfg.ransac_distance_threshold = t;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn read_points(path: &str) -> Result<Vec<Vec3<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {path}"))?;
    let x = df
        .column("x")
        .with_context(|| format!("{path}: missing column `x`"))?
        .cast(&DataType::Float64)?;
    let y = df
        .column("y")
        .with_context(|| format!("{path}: missing column `y`"))?
        .cast(&DataType::Float64)?;
    let z = match df.column("z") {
        Ok(col) => Some(col.cast(&DataType::Float64)?),
        Err(_) => None,
    };
    let (x, y) = (x.f64()?, y.f64()?);
    let z = z.as_ref().map(|s| s.f64()).transpose()?;

    let mut pts = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let zi = match z {
            Some(z) => z.get(i),
            None => Some(0.0),
        };
        match (x.get(i), y.get(i), zi) {
            (Some(x), Some(y), Some(z)) => pts.push(Vec3::new(x, y, z)),
            _ => bail!("{path}: row {i} has a missing coordinate"),
        }
    }
    Ok(pts)
}

fn constraints(input: String, out: String, args: &CfgArgs) -> Result<()> {
    let cfg = load_cfg(args)?;
    let points = read_points(&input)?;
    tracing::info!(input, out, points = points.len(), "constraints");
    let sys = support_constraints(&points, &cfg)
        .with_context(|| format!("support polygon from {input}"))?;

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(
        out_path,
        serde_json::to_vec_pretty(&ConstraintsOut::new(&sys, cfg))?,
    )
    .with_context(|| format!("writing {out}"))?;

    let payload = provenance::Payload::new(serde_json::to_value(cfg)?).with_input(input);
    provenance::write_sidecar(out_path, payload)?;
    tracing::info!(rows = sys.len(), "constraints written");
    Ok(())
}

fn demo(half_width: f64, half_length: f64, stance: f64, args: &CfgArgs) -> Result<()> {
    let cfg = load_cfg(args)?;
    let points = foot_rectangles(half_width, half_length, stance);
    tracing::info!(half_width, half_length, stance, "demo");
    let sys = support_constraints(&points, &cfg)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ConstraintsOut::new(&sys, cfg))?
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": support_polygon::VERSION,
        "defaults": HullCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_without_z_column_is_planar() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("feet.csv");
        std::fs::write(&csv, "x,y\n1,1\n1,-1\n-1,-1\n-1,1\n").unwrap();
        let pts = read_points(csv.to_str().unwrap()).unwrap();
        assert_eq!(pts.len(), 4);
        assert!(pts.iter().all(|p| p.z == 0.0));
        assert_eq!(pts[1], Vec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn constraints_writes_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("feet.csv");
        std::fs::write(
            &csv,
            "x,y,z\n0.1,0.15,0.0\n0.1,-0.15,0.01\n-0.1,-0.15,0.0\n-0.1,0.15,-0.01\n0.0,0.0,0.0\n",
        )
        .unwrap();
        let out = dir.path().join("out").join("stance.json");
        constraints(
            csv.to_string_lossy().into_owned(),
            out.to_string_lossy().into_owned(),
            &CfgArgs {
                margin: Some(0.02),
                ..CfgArgs::default()
            },
        )
        .unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["rows"], 4);
        assert_eq!(parsed["cfg"]["boundary_margin"], 0.02);
        assert!(dir.path().join("out").join("stance.provenance.json").exists());
    }

    #[test]
    fn config_file_then_flag_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{"boundary_margin": 0.03, "ransac_distance_threshold": 0.002}"#)
            .unwrap();
        let cfg = load_cfg(&CfgArgs {
            config: Some(path.to_string_lossy().into_owned()),
            margin: Some(0.005),
            ransac_threshold: None,
        })
        .unwrap();
        assert_eq!(cfg.boundary_margin, 0.005);
        assert_eq!(cfg.ransac_distance_threshold, 0.002);
    }

    #[test]
    fn collinear_csv_fails_with_context() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("line.csv");
        std::fs::write(&csv, "x,y,z\n0,0,0\n1,0,0\n2,0,0\n").unwrap();
        let err = constraints(
            csv.to_string_lossy().into_owned(),
            dir.path().join("o.json").to_string_lossy().into_owned(),
            &CfgArgs::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("degenerate input"));
    }
}
