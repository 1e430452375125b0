pub mod asset;
pub mod font;

pub use asset::{AssetError, AssetSink, InMemoryAssetSink, SharedAssetData};
pub use font::{
    FixedMetricsProvider, FontError, FontMetrics, FontSpec, MetricsProvider, PIXELS_PER_POINT,
};
