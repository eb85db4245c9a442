use super::{ChartRenderer, NO_DATA_MESSAGE, RenderOutput};
use crate::domain::chart::{ChartOutcome, ChartSpec};
use crate::domain::errors::{RenderingError, RenderingResult};
use std::fmt::Write;

/// Plain-text table: one row per label, one column per dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub const NAME: &'static str = "text";

    pub fn new() -> Self {
        Self
    }

    fn check_consistency(spec: &ChartSpec) -> RenderingResult<()> {
        if spec.tick_labels.len() != spec.labels.len() {
            return Err(RenderingError::InconsistentSpec(format!(
                "{} tick labels for {} labels",
                spec.tick_labels.len(),
                spec.labels.len()
            )));
        }
        for dataset in &spec.datasets {
            if dataset.values.len() != spec.labels.len() {
                return Err(RenderingError::InconsistentSpec(format!(
                    "dataset '{}' has {} values for {} labels",
                    dataset.name,
                    dataset.values.len(),
                    spec.labels.len()
                )));
            }
        }
        Ok(())
    }

    fn table(spec: &ChartSpec) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", spec.title);

        let header: Vec<&str> =
            std::iter::once("Date").chain(spec.datasets.iter().map(|d| d.name.as_str())).collect();
        let _ = writeln!(out, "{}", header.join(" | "));

        for (index, label) in spec.labels.iter().enumerate() {
            let mut row = vec![label.clone()];
            for dataset in &spec.datasets {
                let cell = match dataset.values[index] {
                    Some(value) => match spec.axes.get(dataset.axis) {
                        Some(axis) => axis.format.format(value),
                        None => value.to_string(),
                    },
                    None => "-".to_string(),
                };
                row.push(cell);
            }
            let _ = writeln!(out, "{}", row.join(" | "));
        }
        out
    }
}

impl ChartRenderer for TextRenderer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self, outcome: &ChartOutcome) -> RenderingResult<RenderOutput> {
        match outcome {
            ChartOutcome::NoData => Ok(RenderOutput::Placeholder(NO_DATA_MESSAGE.to_string())),
            ChartOutcome::Ready(spec) => {
                Self::check_consistency(spec)?;
                Ok(RenderOutput::Document(Self::table(spec)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::build_economic_chart;
    use crate::domain::market_data::EconomicPoint;

    fn economic() -> ChartOutcome {
        build_economic_chart(
            &[
                EconomicPoint::new("2024-01-01", 3.1, "CPI").with_unit("%"),
                EconomicPoint::new("2024-02-01", 3.2, "CPI").with_unit("%"),
            ],
            None,
        )
    }

    #[test]
    fn prints_one_row_per_label() {
        let output = TextRenderer::new().render(&economic()).unwrap();
        assert_eq!(
            output.body(),
            "Economic Indicator\nDate | CPI (%)\n2024-01-01 | 3.10%\n2024-02-01 | 3.20%\n"
        );
    }

    #[test]
    fn rejects_misaligned_dataset() {
        let mut outcome = economic();
        if let ChartOutcome::Ready(spec) = &mut outcome {
            spec.datasets[0].values.pop();
        }
        assert!(matches!(
            TextRenderer::new().render(&outcome),
            Err(RenderingError::InconsistentSpec(_))
        ));
    }
}
