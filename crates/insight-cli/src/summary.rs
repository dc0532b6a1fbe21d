use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use insight_model::{AnalysisBundle, BundleStatus, InsightCategory, QualityRating, WarningKind};

/// Render the table report. `plain` drops ANSI styling for file output.
pub fn render_summary(bundle: &AnalysisBundle, file: &Path, plain: bool) -> String {
    let mut sections = vec![
        format!("File: {}", file.display()),
        overview_table(bundle, plain).to_string(),
    ];
    if bundle.status == BundleStatus::NoSupportedColumns {
        sections.push("No numeric or categorical columns; nothing was analyzed.".to_string());
    }
    if !bundle.numeric_stats.is_empty() {
        sections.push(numeric_table(bundle, plain).to_string());
    }
    if !bundle.categorical_profiles.is_empty() {
        sections.push(categorical_table(bundle, plain).to_string());
    }
    if !bundle.correlations.is_empty() {
        sections.push(correlation_table(bundle, plain).to_string());
    }
    if !bundle.insights.is_empty() {
        sections.push(insight_table(bundle, plain).to_string());
    }
    if !bundle.warnings.is_empty() {
        sections.push(warning_table(bundle, plain).to_string());
    }
    let mut out = sections.join("\n");
    out.push('\n');
    out
}

fn overview_table(bundle: &AnalysisBundle, plain: bool) -> Table {
    let mut table = new_table(plain);
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    let quality = &bundle.quality;
    table.add_row(vec![Cell::new("Rows"), Cell::new(bundle.row_count)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(bundle.column_count)]);
    table.add_row(vec![
        Cell::new("Numeric / categorical / unsupported"),
        Cell::new(format!(
            "{} / {} / {}",
            bundle.columns.numeric.len(),
            bundle.columns.categorical.len(),
            bundle.columns.unsupported.len()
        )),
    ]);
    table.add_row(vec![
        Cell::new("Missing cells"),
        Cell::new(format!(
            "{} ({:.1}%) in {} column(s)",
            quality.total_missing_cells, quality.missing_percentage, quality.columns_with_missing
        )),
    ]);
    table.add_row(vec![
        Cell::new("Quality score"),
        Cell::new(format!("{:.1} ({})", quality.score, quality.rating))
            .fg(rating_color(quality.rating))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Recommended analysis"),
        Cell::new(bundle.recommended_analysis_type.label()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn numeric_table(bundle: &AnalysisBundle, plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![
        header_cell("Column"),
        header_cell("N"),
        header_cell("Missing"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Skew"),
        header_cell("CV"),
        header_cell("Outliers"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stats in &bundle.numeric_stats {
        table.add_row(vec![
            Cell::new(&stats.name).add_attribute(Attribute::Bold),
            Cell::new(stats.count),
            count_cell(stats.missing, Color::Yellow),
            number_cell(stats.mean),
            number_cell(stats.median),
            number_cell(stats.std),
            number_cell(stats.min),
            number_cell(stats.max),
            number_cell(stats.skewness),
            match stats.coefficient_of_variation {
                Some(cv) => Cell::new(format!("{:.1}%", cv * 100.0)),
                None => dim_cell("-"),
            },
            match stats.outliers {
                Some(outliers) => count_cell(outliers.count, Color::Red),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

fn categorical_table(bundle: &AnalysisBundle, plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![
        header_cell("Column"),
        header_cell("N"),
        header_cell("Missing"),
        header_cell("Unique"),
        header_cell("Top value"),
        header_cell("Top %"),
        header_cell("Entropy"),
        header_cell("Cardinality"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [1, 2, 3, 5, 6] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for profile in &bundle.categorical_profiles {
        let top = profile.top_category();
        table.add_row(vec![
            Cell::new(&profile.name).add_attribute(Attribute::Bold),
            Cell::new(profile.count),
            count_cell(profile.missing, Color::Yellow),
            Cell::new(profile.unique_count),
            top.map_or_else(|| dim_cell("-"), |top| Cell::new(&top.value)),
            top.map_or_else(
                || dim_cell("-"),
                |top| Cell::new(format!("{:.1}", top.percentage)),
            ),
            number_cell(profile.entropy),
            if profile.identifier_like {
                Cell::new("identifier").fg(Color::Magenta)
            } else {
                Cell::new(profile.cardinality)
            },
        ]);
    }
    table
}

fn correlation_table(bundle: &AnalysisBundle, plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![
        header_cell("Column A"),
        header_cell("Column B"),
        header_cell("r"),
        header_cell("Strength"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for pair in &bundle.correlations {
        let strength = Cell::new(pair.strength);
        table.add_row(vec![
            Cell::new(&pair.column_a),
            Cell::new(&pair.column_b),
            Cell::new(format!("{:.3}", pair.coefficient)),
            if pair.strength.is_at_least_weak() {
                strength.add_attribute(Attribute::Bold)
            } else {
                strength.fg(Color::DarkGrey)
            },
            Cell::new(pair.observations),
        ]);
    }
    table
}

fn insight_table(bundle: &AnalysisBundle, plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![header_cell("Category"), header_cell("Insight")]);
    apply_table_style(&mut table);
    for insight in bundle.insights.iter() {
        let category = match insight.category {
            InsightCategory::Numeric => "numeric",
            InsightCategory::Categorical => "categorical",
            InsightCategory::Correlation => "correlation",
        };
        table.add_row(vec![Cell::new(category).fg(Color::Cyan), Cell::new(&insight.text)]);
    }
    table
}

fn warning_table(bundle: &AnalysisBundle, plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![
        header_cell("Warning"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for warning in &bundle.warnings {
        let color = match warning.kind {
            WarningKind::MalformedColumn | WarningKind::EmptyDataset => Color::Red,
            WarningKind::InsufficientData | WarningKind::DegenerateDistribution => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(warning.kind).fg(color),
            warning
                .column
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&warning.message),
        ]);
    }
    table
}

fn new_table(plain: bool) -> Table {
    let mut table = Table::new();
    if plain {
        table.force_no_tty();
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rating_color(rating: QualityRating) -> Color {
    match rating {
        QualityRating::Excellent => Color::Green,
        QualityRating::Good => Color::Cyan,
        QualityRating::Moderate => Color::Yellow,
        QualityRating::Poor => Color::Red,
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use insight_core::{AnalysisEngine, Dataset};
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    use super::*;

    fn bundle() -> AnalysisBundle {
        let dataset = Dataset::from_columns(vec![
            Series::new("x".into(), &[1.0, 2.0, 3.0, 4.0, 100.0]).into_column(),
            Series::new("y".into(), &[10.0, 20.0, 30.0, 40.0, 50.0]).into_column(),
            Series::new("grade".into(), &["A", "A", "A", "B", "C"]).into_column(),
        ])
        .unwrap();
        AnalysisEngine::default().analyze(&dataset)
    }

    #[test]
    fn test_plain_summary_lists_every_section() {
        let text = render_summary(&bundle(), Path::new("data.csv"), true);

        assert!(text.starts_with("File: data.csv\n"));
        assert!(text.contains("Recommended analysis"));
        assert!(text.contains("Exploratory Data Analysis"));
        assert!(text.contains("Top value"));
        assert!(text.contains("(r=0.725)"));
        assert!(text.contains("dominated by 'A'"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_flagged_bundle_says_nothing_was_analyzed() {
        let dataset = Dataset::from_columns(vec![
            Series::full_null("blob".into(), 2, &polars::prelude::DataType::Null).into_column(),
        ])
        .unwrap();
        let bundle = AnalysisEngine::default().analyze(&dataset);
        let text = render_summary(&bundle, Path::new("blob.csv"), true);

        assert!(text.contains("\nNo numeric or categorical columns; nothing was analyzed.\n"));
        assert!(text.contains("malformed_column"));
        assert!(text.ends_with('\n'));
        assert!(!text.contains("Top value"));
    }
}
