//! Single-shot geometric queries and their JSON-ready results.

use anyhow::{bail, Context, Result};
use planar::line2::{self, LineCfg};
use planar::{Matrix3, Point2};
use serde::Serialize;
use std::str::FromStr;

/// One step of a transform chain, parsed from `translate:x,y`, `rotate:rad` or `scale:x,y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate(Point2),
    Rotate(f64),
    Scale(Point2),
}

impl FromStr for TransformOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, arg) = s
            .split_once(':')
            .with_context(|| format!("transform step {s:?} must look like kind:args"))?;
        let point = || {
            arg.parse::<Point2>()
                .with_context(|| format!("bad {kind} argument {arg:?}"))
        };
        match kind.trim() {
            "translate" => Ok(TransformOp::Translate(point()?)),
            "scale" => Ok(TransformOp::Scale(point()?)),
            "rotate" => {
                let angle = arg
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("bad rotate angle {arg:?}"))?;
                Ok(TransformOp::Rotate(angle))
            }
            other => bail!("unknown transform step {other:?} (expected translate, rotate or scale)"),
        }
    }
}

/// Compose the steps left to right, each post-multiplied onto the previous.
pub fn compose(ops: &[TransformOp]) -> Matrix3 {
    ops.iter().fold(Matrix3::identity(), |m, op| match *op {
        TransformOp::Translate(t) => m.translate(t.x, t.y),
        TransformOp::Rotate(a) => m.rotate(a),
        TransformOp::Scale(s) => m.scale(s.x, s.y),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    Length { v: Point2, w: Point2 },
    Contains { v: Point2, w: Point2, p: Point2 },
    SegmentContains { v: Point2, w: Point2, p: Point2 },
    Intersect { v1: Point2, w1: Point2, v2: Point2, w2: Point2, general: bool },
    SegmentIntersect { v1: Point2, w1: Point2, v2: Point2, w2: Point2 },
    AxisX { v: Point2, w: Point2, y: f64 },
    AxisY { v: Point2, w: Point2, x: f64 },
    Perpendicular { v1: Point2, w1: Point2, v2: Point2 },
    Transform { p: Point2, ops: Vec<TransformOp> },
}

/// Query result; `Point(None)` serializes as `null` ("no intersection").
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Scalar(f64),
    Point(Option<[f64; 2]>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryOutput {
    pub op: &'static str,
    pub eps_on_line: f64,
    pub result: Answer,
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::Length { .. } => "length",
            Query::Contains { .. } => "contains",
            Query::SegmentContains { .. } => "segment-contains",
            Query::Intersect { general: false, .. } => "intersect",
            Query::Intersect { general: true, .. } => "intersect-general",
            Query::SegmentIntersect { .. } => "segment-intersect",
            Query::AxisX { .. } => "axis-x",
            Query::AxisY { .. } => "axis-y",
            Query::Perpendicular { .. } => "perpendicular",
            Query::Transform { .. } => "transform",
        }
    }
}

fn point(p: Option<Point2>) -> Answer {
    Answer::Point(p.map(Into::into))
}

pub fn evaluate(q: &Query, cfg: LineCfg) -> QueryOutput {
    let result = match q {
        Query::Length { v, w } => Answer::Scalar(line2::segment_length(*v, *w)),
        Query::Contains { v, w, p } => Answer::Bool(line2::contains_vertex(*v, *w, *p, cfg)),
        Query::SegmentContains { v, w, p } => {
            Answer::Bool(line2::segment_contains_vertex(*v, *w, *p, cfg))
        }
        Query::Intersect {
            v1,
            w1,
            v2,
            w2,
            general,
        } => {
            if *general {
                point(line2::intersect_general(*v1, *w1, *v2, *w2))
            } else {
                point(line2::intersect(*v1, *w1, *v2, *w2))
            }
        }
        Query::SegmentIntersect { v1, w1, v2, w2 } => {
            point(line2::segment_intersect(*v1, *w1, *v2, *w2))
        }
        Query::AxisX { v, w, y } => point(line2::intersect_axis_x(*v, *w, *y)),
        Query::AxisY { v, w, x } => point(line2::intersect_axis_y(*v, *w, *x)),
        Query::Perpendicular { v1, w1, v2 } => point(Some(line2::perpendicular(*v1, *w1, *v2))),
        Query::Transform { p, ops } => point(Some(compose(ops) * *p)),
    };
    QueryOutput {
        op: q.name(),
        eps_on_line: cfg.eps_on_line,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn to_json(q: Query) -> Value {
        serde_json::to_value(evaluate(&q, LineCfg::default())).unwrap()
    }

    #[test]
    fn containment_queries_report_bools() {
        let out = to_json(Query::Contains {
            v: p(1.0, 1.0),
            w: p(9.0, 5.0),
            p: p(3.0, 2.0),
        });
        assert_eq!(out, json!({"op": "contains", "eps_on_line": 1e-6, "result": true}));
        let out = to_json(Query::SegmentContains {
            v: p(1.0, 1.0),
            w: p(9.0, 5.0),
            p: p(-1.0, 0.0),
        });
        assert_eq!(out["result"], json!(false));
    }

    #[test]
    fn intersection_none_is_null() {
        let out = to_json(Query::Intersect {
            v1: p(0.0, 0.0),
            w1: p(1.0, 1.0),
            v2: p(0.0, 1.0),
            w2: p(1.0, 2.0),
            general: false,
        });
        assert_eq!(out["op"], json!("intersect"));
        assert_eq!(out["result"], Value::Null);
    }

    #[test]
    fn intersection_point_is_pair() {
        let out = to_json(Query::SegmentIntersect {
            v1: p(1.0, 1.0),
            w1: p(5.0, 5.0),
            v2: p(1.0, 5.0),
            w2: p(5.0, 1.0),
        });
        assert_eq!(out["result"], json!([3.0, 3.0]));
        let out = to_json(Query::AxisX {
            v: p(1.0, 2.0),
            w: p(2.0, 4.0),
            y: 3.0,
        });
        assert_eq!(out["result"], json!([1.5, 3.0]));
    }

    #[test]
    fn general_flag_selects_vertical_aware_intersection() {
        let q = |general| Query::Intersect {
            v1: p(0.0, 0.0),
            w1: p(0.0, 1.0),
            v2: p(-1.0, -1.0),
            w2: p(1.0, 1.0),
            general,
        };
        // NaN coordinates serialize as null inside the pair.
        assert_eq!(to_json(q(false))["result"], json!([null, null]));
        let out = to_json(q(true));
        assert_eq!(out["op"], json!("intersect-general"));
        assert_eq!(out["result"], json!([0.0, 0.0]));
    }

    #[test]
    fn eps_flows_into_output() {
        let q = Query::Contains {
            v: p(0.0, 0.0),
            w: p(1.0, 2.0),
            p: p(1.0, 2.0 + 5e-7),
        };
        let out = evaluate(&q, LineCfg::with_eps(1e-7));
        assert_eq!(out.eps_on_line, 1e-7);
        assert_eq!(out.result, Answer::Bool(false));
    }

    #[test]
    fn transform_ops_parse() {
        assert_eq!(
            "translate:1,2".parse::<TransformOp>().unwrap(),
            TransformOp::Translate(p(1.0, 2.0))
        );
        assert_eq!(
            "rotate: 0.5".parse::<TransformOp>().unwrap(),
            TransformOp::Rotate(0.5)
        );
        assert_eq!(
            "scale:2,3".parse::<TransformOp>().unwrap(),
            TransformOp::Scale(p(2.0, 3.0))
        );
        assert!("shear:1,2".parse::<TransformOp>().is_err());
        assert!("translate".parse::<TransformOp>().is_err());
        let err = "scale:2".parse::<TransformOp>().unwrap_err();
        assert!(format!("{err:#}").contains("two components"));
    }

    #[test]
    fn transform_chain_post_multiplies() {
        let ops = vec![
            TransformOp::Translate(p(10.0, 0.0)),
            TransformOp::Scale(p(2.0, 2.0)),
        ];
        assert_eq!(
            compose(&ops),
            Matrix3::translation(10.0, 0.0).scale(2.0, 2.0)
        );
        let out = to_json(Query::Transform {
            p: p(1.0, 1.0),
            ops,
        });
        assert_eq!(out["result"], json!([12.0, 2.0]));
        assert_eq!(compose(&[]), Matrix3::identity());
    }

    #[test]
    fn length_and_perpendicular() {
        let out = to_json(Query::Length {
            v: p(0.0, 0.0),
            w: p(3.0, 4.0),
        });
        assert_eq!(out["result"], json!(5.0));
        let out = to_json(Query::Perpendicular {
            v1: p(1.0, 1.0),
            w1: p(5.0, 5.0),
            v2: p(1.0, 5.0),
        });
        assert_eq!(out["result"], json!([2.0, 4.0]));
    }
}
