use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::line2::{LineCfg, EPS_ON_LINE};
use planar::Point2;
use tracing_subscriber::fmt::SubscriberBuilder;

mod query;

use query::{evaluate, Query, TransformOp};

#[derive(Parser, Debug)]
#[command(name = "planar")]
#[command(about = "Evaluate a single 2D line/segment query and print the result as JSON")]
struct Cmd {
    /// Tolerance for sloped on-line checks
    #[arg(long, global = true, default_value_t = EPS_ON_LINE)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Length of the segment v–w
    Length {
        #[arg(long, allow_hyphen_values = true)]
        v: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w: Point2,
    },
    /// Is p on the infinite line through v and w?
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        v: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w: Point2,
        #[arg(long, allow_hyphen_values = true)]
        p: Point2,
    },
    /// Is p on the closed segment v–w?
    SegmentContains {
        #[arg(long, allow_hyphen_values = true)]
        v: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w: Point2,
        #[arg(long, allow_hyphen_values = true)]
        p: Point2,
    },
    /// Intersection of the lines v1–w1 and v2–w2
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        v1: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w1: Point2,
        #[arg(long, allow_hyphen_values = true)]
        v2: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w2: Point2,
        /// Also resolve the case where exactly one line is vertical
        #[arg(long)]
        general: bool,
    },
    /// Intersection of the segments v1–w1 and v2–w2
    SegmentIntersect {
        #[arg(long, allow_hyphen_values = true)]
        v1: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w1: Point2,
        #[arg(long, allow_hyphen_values = true)]
        v2: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w2: Point2,
    },
    /// Where the line v–w crosses the horizontal line Y = y
    AxisX {
        #[arg(long, allow_hyphen_values = true)]
        v: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w: Point2,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Where the line v–w crosses the vertical line X = x
    AxisY {
        #[arg(long, allow_hyphen_values = true)]
        v: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w: Point2,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
    },
    /// Second point of the perpendicular to v1–w1 through v2
    Perpendicular {
        #[arg(long, allow_hyphen_values = true)]
        v1: Point2,
        #[arg(long, allow_hyphen_values = true)]
        w1: Point2,
        #[arg(long, allow_hyphen_values = true)]
        v2: Point2,
    },
    /// Apply a chain of steps (translate:x,y | rotate:rad | scale:x,y) to p
    Transform {
        #[arg(long, allow_hyphen_values = true)]
        p: Point2,
        #[arg(long = "op")]
        ops: Vec<TransformOp>,
    },
    /// Print version and default tolerance
    Report,
}

impl Action {
    fn into_query(self) -> Option<Query> {
        let q = match self {
            Action::Length { v, w } => Query::Length { v, w },
            Action::Contains { v, w, p } => Query::Contains { v, w, p },
            Action::SegmentContains { v, w, p } => Query::SegmentContains { v, w, p },
            Action::Intersect {
                v1,
                w1,
                v2,
                w2,
                general,
            } => Query::Intersect {
                v1,
                w1,
                v2,
                w2,
                general,
            },
            Action::SegmentIntersect { v1, w1, v2, w2 } => {
                Query::SegmentIntersect { v1, w1, v2, w2 }
            }
            Action::AxisX { v, w, y } => Query::AxisX { v, w, y },
            Action::AxisY { v, w, x } => Query::AxisY { v, w, x },
            Action::Perpendicular { v1, w1, v2 } => Query::Perpendicular { v1, w1, v2 },
            Action::Transform { p, ops } => Query::Transform { p, ops },
            Action::Report => return None,
        };
        Some(q)
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = LineCfg::with_eps(cmd.eps);
    match cmd.action.into_query() {
        Some(q) => run(&q, cfg),
        None => report(cfg),
    }
}

fn run(q: &Query, cfg: LineCfg) -> Result<()> {
    tracing::info!(op = q.name(), eps = cfg.eps_on_line, query = ?q, "query");
    let out = evaluate(q, cfg);
    tracing::debug!(result = ?out.result, "evaluated");
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report(cfg: LineCfg) -> Result<()> {
    let obj = serde_json::json!({
        "name": "planar",
        "version": planar::VERSION,
        "eps_on_line": cfg.eps_on_line,
        "default_eps_on_line": EPS_ON_LINE,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
