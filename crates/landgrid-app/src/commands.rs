//! Subcommand bodies. Output goes to any writer so the text can be tested.

use std::io::{self, Write};
use std::path::Path;

use landgrid_grid::ParcelId;
use landgrid_registry::ZoningCategory;
use landgrid_view::{DetailPanel, LandModel, ViewMode};

use crate::AppError;

pub(crate) fn report(model: &LandModel, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<12} {:>5} {:<12} {:>10} {:>14} {:>8} {:>8}",
        "ID", "TYPE", "CELLS", "ZONING", "ASSESSED", "W/ BUILDINGS", "LVT", "USE TAX"
    )?;
    for row in model.summaries() {
        writeln!(
            out,
            "{:<10} {:<12} {:>5} {:<12} {:>10} {:>14} {:>8} {:>8}",
            row.id.as_str(),
            row.land_use.label(),
            row.cell_count,
            row.zoning.map_or("-", ZoningCategory::label),
            row.assessed_value,
            row.value_with_buildings,
            row.land_value_tax,
            row.land_use_tax,
        )?;
    }
    let range = model.tax_range();
    writeln!(out, "Use-tax range: ${} .. ${}", range.min, range.max)
}

pub(crate) fn print_panel(panel: &DetailPanel, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{panel}")
}

pub(crate) fn print_owner(
    col: i64,
    row: i64,
    owner: Option<&ParcelId>,
    out: &mut impl Write,
) -> io::Result<()> {
    match owner {
        Some(id) => writeln!(out, "({col},{row}) belongs to {id}"),
        None => writeln!(out, "({col},{row}) is not part of any parcel"),
    }
}

/// Draw the grid with 24-bit ANSI background colors, two columns per tile.
pub(crate) fn map(
    model: &LandModel,
    view: ViewMode,
    selected: Option<&str>,
    out: &mut impl Write,
) -> io::Result<()> {
    let tiles = model.render(view, selected, None);
    let size = usize::from(model.grid().size());
    for row in tiles.chunks(size) {
        for tile in row {
            let c = tile.highlight.color().unwrap_or(tile.color);
            write!(out, "\x1b[48;2;{};{};{}m  ", c.r, c.g, c.b)?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    writeln!(out, "view: {view}")
}

pub(crate) fn zone(model: &LandModel, id: &str, category: &str) -> Result<DetailPanel, AppError> {
    let category = ZoningCategory::from_id(category)
        .ok_or_else(|| AppError::UnknownCategory(category.to_string()))?;
    model.assign_zoning(id, category)?;
    Ok(model.detail(id)?)
}

pub(crate) fn export_catalog(model: &LandModel, path: &Path) -> Result<(), AppError> {
    let ron = model.catalog().to_ron_string()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| AppError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, ron).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use landgrid_registry::Catalog;

    fn model() -> LandModel {
        LandModel::standard().unwrap()
    }

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_lists_every_parcel() {
        let m = model();
        let out = text(|buf| report(&m, buf));
        let lines: Vec<&str> = out.lines().collect();
        // Header, 48 parcels, range footer.
        assert_eq!(lines.len(), 50);
        assert!(lines[1].starts_with("0xAB12CD"));
        assert!(lines[1].contains("35,000"));
        assert!(lines[1].contains("77,000"));
        assert!(out.ends_with("Use-tax range: $525 .. $4,988\n"));
    }

    #[test]
    fn test_map_has_one_line_per_row() {
        let m = model();
        let out = text(|buf| map(&m, ViewMode::Zoning, Some("0xAB12CD"), buf));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0].matches("\x1b[48;2;").count(), 15);
        // The selected parcel is drawn in the selection color.
        assert!(lines[8].contains("\x1b[48;2;2;130;2m"));
        assert_eq!(lines[15], "view: zoning");
    }

    #[test]
    fn test_zone_command() {
        let m = model();
        let panel = zone(&m, "0xAB12CD", "Commercial").unwrap();
        assert_eq!(panel.zoning, Some(ZoningCategory::Commercial));

        assert!(matches!(
            zone(&m, "0xAB12CD", "industrial"),
            Err(AppError::UnknownCategory(_))
        ));
        assert!(matches!(
            zone(&m, "0xNOPE", "commercial"),
            Err(AppError::Model(_))
        ));
    }

    #[test]
    fn test_owner_lookup_text() {
        let m = model();
        let owner = m.parcel_at(8, 8).unwrap();
        let out = text(|buf| print_owner(8, 8, owner.as_ref(), buf));
        assert_eq!(out, "(8,8) belongs to 0xAB12CD\n");
        let out = text(|buf| print_owner(0, 0, None, buf));
        assert_eq!(out, "(0,0) is not part of any parcel\n");
    }

    #[test]
    fn test_export_then_reload() {
        let m = model();
        m.assign_zoning("0xFB56HT", ZoningCategory::Commercial)
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("catalog.ron");
        export_catalog(&m, &path).unwrap();

        let reloaded = LandModel::new(Catalog::from_ron(&path).unwrap()).unwrap();
        assert_eq!(reloaded.parcel_ids(), m.parcel_ids());
        assert_eq!(
            reloaded.zoning().get("0xFB56HT"),
            Some(ZoningCategory::Commercial)
        );
    }
}
