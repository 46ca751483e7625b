use crate::core::report::format_detachments;
use crate::core::search::{sort_by_number, within_radius};
use crate::core::{ConfigProvider, DetachmentSource};
use crate::utils::error::Result;

/// Linear load -> filter -> sort -> format pipeline. Runs to completion or
/// fails; a loader error aborts before any output is produced.
pub struct SearchPipeline<S: DetachmentSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: DetachmentSource, C: ConfigProvider> SearchPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Loading detachment roster");
        let detachments = self.source.load()?;
        tracing::info!("Loaded {} detachments", detachments.len());

        let mut nearby = within_radius(
            &detachments,
            self.config.origin_latitude(),
            self.config.origin_longitude(),
            self.config.radius_miles(),
        );
        tracing::info!(
            "{} detachments within {} miles",
            nearby.len(),
            self.config.radius_miles()
        );

        sort_by_number(&mut nearby);
        Ok(format_detachments(&nearby))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::in_memory::InMemorySource;
    use crate::config::SearchConfig;
    use crate::domain::model::Detachment;

    #[test]
    fn test_run_filters_sorts_and_formats() {
        let source = InMemorySource::new(vec![
            Detachment::new("101", "Gator", "Gainesville", "FL", 29.6516, -82.3248),
            Detachment::new("77", "Central Florida", "Orlando", "FL", 28.5383, -81.3792),
            Detachment::new("12", "St. Johns River", "Orange Park", "FL", 30.1660, -81.7065),
        ]);
        let pipeline = SearchPipeline::new(source, SearchConfig::default());
        let report = pipeline.run().unwrap();
        assert_eq!(
            report,
            "12 St. Johns River - Orange Park, FL\n101 Gator - Gainesville, FL"
        );
    }

    #[test]
    fn test_run_with_no_matches_yields_empty_report() {
        let source = InMemorySource::new(vec![Detachment::new(
            "77",
            "Central Florida",
            "Orlando",
            "FL",
            28.5383,
            -81.3792,
        )]);
        let pipeline = SearchPipeline::new(source, SearchConfig::default());
        assert_eq!(pipeline.run().unwrap(), "");
    }
}
