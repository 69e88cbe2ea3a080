//! Merge the preset and the command line into one immutable run description.

use std::path::PathBuf;

use imgcat_common::{Color, CompositePolicy, ConfigError, Point};
use imgcat_config::ImgcatConfig;
use imgcat_layout::{
    LayoutConfig, LayoutEngine, LayoutKind, LayoutMode, SpacingConfig, SpacingPolicy,
};
use imgcat_render::OutputFormat;
use tracing::warn;

use crate::cli::Args;

/// Where and how the composite is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Everything a run needs, resolved once before any image I/O.
#[derive(Debug, Clone)]
pub struct Settings {
    pub inputs: Vec<PathBuf>,
    /// `None` only for dry runs.
    pub output: Option<OutputTarget>,
    pub engine: LayoutEngine,
    pub composite: CompositePolicy,
    pub background: Color,
}

impl Settings {
    /// Command-line values win over the preset.
    pub fn resolve(args: &Args, preset: &ImgcatConfig) -> Result<Self, ConfigError> {
        if args.inputs.is_empty() {
            return Err(invalid("at least one input image is required"));
        }

        let kind = args.layout.map(LayoutKind::from).unwrap_or(preset.layout.kind);
        let (Some(width), Some(height)) = (
            args.width.or(preset.layout.width),
            args.height.or(preset.layout.height),
        ) else {
            return Err(invalid("required '--width' and '--height'"));
        };

        let mode = layout_mode(kind, args, preset)?;
        let config = LayoutConfig::new(mode, width, height).map_err(|e| invalid(e.to_string()))?;

        let gap = args.gap.or(preset.spacing.gap);
        let margin = args.margin.or(preset.spacing.margin);
        let spacing = if gap.is_none() && margin.is_none() {
            SpacingPolicy::None
        } else {
            SpacingPolicy::GapMargin(SpacingConfig {
                gap: gap.unwrap_or(0),
                margin: margin.unwrap_or(0),
            })
        };

        let source = Point::new(
            args.x.unwrap_or(preset.source.x),
            args.y.unwrap_or(preset.source.y),
        );

        let composite = args
            .composite
            .map(CompositePolicy::from)
            .or(preset.output.composite)
            .unwrap_or(match kind {
                LayoutKind::Tiling => CompositePolicy::Overlay,
                LayoutKind::Vertical | LayoutKind::Horizontal => CompositePolicy::Overwrite,
            });

        let background_str = args
            .background
            .as_deref()
            .unwrap_or(&preset.output.background);
        let background = Color::parse(background_str).ok_or_else(|| {
            invalid(format!("'--background' {background_str:?} is not a valid color"))
        })?;

        let quality = args.quality.unwrap_or(preset.output.quality);
        let target = match &args.output {
            Some(path) => Some(OutputTarget {
                path: path.clone(),
                format: OutputFormat::from_path(path, quality).map_err(|e| invalid(e.to_string()))?,
            }),
            None if args.dry_run => None,
            None => return Err(invalid("required '--output' arg")),
        };
        // A dry run never touches the output, even when one is named.
        let output = if args.dry_run { None } else { target };

        Ok(Self {
            inputs: args.inputs.clone(),
            output,
            engine: LayoutEngine::new(config)
                .with_spacing(spacing)
                .with_source(source),
            composite,
            background,
        })
    }
}

fn layout_mode(
    kind: LayoutKind,
    args: &Args,
    preset: &ImgcatConfig,
) -> Result<LayoutMode, ConfigError> {
    let wrap = args.wrap.unwrap_or(preset.layout.wrap);
    let columns = args.columns.or(preset.layout.columns);

    match kind {
        LayoutKind::Vertical | LayoutKind::Horizontal => {
            if columns.is_some() {
                warn!("'--columns' only applies to the tiling layout, ignoring it");
            }
            Ok(if kind == LayoutKind::Vertical {
                LayoutMode::vertical(wrap)
            } else {
                LayoutMode::horizontal(wrap)
            })
        }
        LayoutKind::Tiling => {
            if wrap != 0 {
                warn!("'--wrap' does not apply to the tiling layout, ignoring it");
            }
            let columns =
                columns.ok_or_else(|| invalid("'--columns' is required for the tiling layout"))?;
            LayoutMode::tiling(columns).map_err(|e| invalid(format!("'--columns': {e}")))
        }
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidArgument(message.into())
}
