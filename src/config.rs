use std::path::PathBuf;

use clap::Parser;

use crate::gfx::transform::{ModelBinding, ProjectionPolicy, TransformComposer};
use crate::logging::LoggingConfig;

const WIDTH: f32 = 800f32;
const HEIGHT: f32 = 600f32;

/// Orthographic model viewer driven by the keyboard.
#[derive(Debug, Parser)]
#[command(name = "orbit_viewer", version)]
pub struct Args {
    /// Text file with one `x y z r g b` vertex per line; lines starting with `#` are skipped
    pub vertex_file: PathBuf,

    /// Number of vertices to draw, taken from the start of the file
    pub vertex_count: usize,

    /// How zoom changes the orthographic box
    #[arg(long, value_enum, default_value_t = ProjectionPolicy::Widening)]
    pub projection: ProjectionPolicy,

    /// Whether the model rotation is its own uniform or part of `mvp`
    #[arg(long, value_enum, default_value_t = ModelBinding::Separate)]
    pub model_binding: ModelBinding,

    #[arg(long, default_value_t = WIDTH)]
    pub width: f32,

    #[arg(long, default_value_t = HEIGHT)]
    pub height: f32,

    /// Log filter in `env_logger` syntax; overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub vertex_file: PathBuf,
    pub vertex_count: usize,
    pub composer: TransformComposer,
    pub window_size: [f32; 2],
    pub logging: LoggingConfig,
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            vertex_file: args.vertex_file,
            vertex_count: args.vertex_count,
            composer: TransformComposer::new(args.projection, args.model_binding),
            window_size: [args.width, args.height],
            logging: LoggingConfig {
                env_filter: args.log,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn two_positionals_use_canonical_defaults() {
        let args = Args::try_parse_from(["orbit_viewer", "model.txt", "36"]).unwrap();
        let config = ViewerConfig::from(args);

        assert_eq!(config.vertex_file, PathBuf::from("model.txt"));
        assert_eq!(config.vertex_count, 36);
        assert_eq!(config.composer, TransformComposer::default());
        assert_eq!(config.window_size, [800.0, 600.0]);
        assert!(config.logging.env_filter.is_none());
    }

    #[test]
    fn missing_count_is_rejected() {
        let err = Args::try_parse_from(["orbit_viewer", "model.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage"));

        let err = Args::try_parse_from(["orbit_viewer"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn count_must_be_a_number() {
        assert!(Args::try_parse_from(["orbit_viewer", "model.txt", "many"]).is_err());
        assert!(Args::try_parse_from(["orbit_viewer", "model.txt", "-3"]).is_err());
    }

    #[test]
    fn historical_variant_is_selectable() {
        let args = Args::try_parse_from([
            "orbit_viewer",
            "model.txt",
            "40",
            "--projection",
            "depth-shift",
            "--model-binding",
            "folded",
            "--log",
            "debug",
        ])
        .unwrap();
        let config = ViewerConfig::from(args);

        assert_eq!(config.composer.projection, ProjectionPolicy::DepthShift);
        assert_eq!(config.composer.model_binding, ModelBinding::Folded);
        assert_eq!(config.logging.env_filter.as_deref(), Some("debug"));
    }
}
