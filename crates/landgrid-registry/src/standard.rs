//! The built-in parcel catalog and its default zoning.

use landgrid_grid::{Cell, ParcelId};

use crate::{LandUse, Parcel, ZoningCategory};

pub(crate) fn parcels() -> Vec<Parcel> {
    STANDARD_PARCELS
        .iter()
        .map(|&(id, land_use, cells)| {
            let cells = cells
                .iter()
                .filter_map(|&(col, row)| Cell::new(i64::from(col), i64::from(row)).ok())
                .collect();
            Parcel::new(id, cells, land_use)
        })
        .collect()
}

pub(crate) fn zoning() -> Vec<(ParcelId, ZoningCategory)> {
    STANDARD_ZONING
        .iter()
        .map(|&(id, category)| (ParcelId::from(id), category))
        .collect()
}

#[rustfmt::skip]
const STANDARD_PARCELS: &[(&str, LandUse, &[(u8, u8)])] = &[
    ("0xAB12CD", LandUse::Residential, &[(8, 8)]),
    ("0xDY12HS", LandUse::Residential, &[(6, 6), (6, 7), (6, 8), (7, 6), (7, 7), (7, 8)]),
    ("0xUY83EH", LandUse::Residential, &[(9, 7), (8, 7), (8, 6)]),
    ("0xDF90WM", LandUse::Residential, &[(10, 8)]),
    ("0xKD05AY", LandUse::Residential, &[(10, 9), (11, 9), (12, 9), (12, 8)]),
    ("0xNB12UF", LandUse::Residential, &[(8, 9), (8, 10)]),
    ("0xGB16GT", LandUse::Residential, &[(7, 10), (7, 9)]),
    ("0xFB56HT", LandUse::Unused, &[(6, 10), (6, 9)]),
    ("0xEF34GH", LandUse::Residential, &[(10, 10), (11, 10)]),
    ("0xSH38AG", LandUse::Residential, &[(6, 12), (7, 12)]),
    ("0xEF04SH", LandUse::Residential, &[(6, 13), (6, 14), (7, 13), (7, 14)]),
    ("0xKD89KF", LandUse::Residential, &[(8, 12), (8, 13), (8, 14)]),
    ("0xFG38ZU", LandUse::Residential, &[(9, 12), (9, 13), (9, 14)]),
    (
        "0xTY10DH",
        LandUse::Residential,
        &[
            (10, 12), (10, 13), (10, 14), (11, 12), (11, 13), (11, 14),
        ],
    ),
    (
        "0xQX12KS",
        LandUse::Residential,
        &[
            (13, 6), (13, 7), (13, 8), (13, 9), (13, 10), (14, 6),
            (14, 7), (14, 8), (14, 9), (14, 10),
        ],
    ),
    ("0xOP99AU", LandUse::Services, &[(4, 10), (3, 10)]),
    ("0xSG36AT", LandUse::Residential, &[(4, 14), (3, 14)]),
    ("0xDT24EC", LandUse::Residential, &[(4, 13), (3, 13), (4, 12), (3, 12)]),
    ("0xSY37EG", LandUse::Residential, &[(4, 11), (3, 11)]),
    ("0xAU37EG", LandUse::Residential, &[(4, 9), (3, 9)]),
    ("0xDG76QL", LandUse::Residential, &[(4, 8), (3, 8)]),
    ("0xYB45SU", LandUse::Residential, &[(4, 7), (3, 7)]),
    ("0xZY28RN", LandUse::Residential, &[(4, 6), (3, 6)]),
    ("0xSB75PF", LandUse::Residential, &[(2, 4), (2, 5)]),
    ("0xYC27EC", LandUse::Residential, &[(4, 0), (3, 0)]),
    ("0xEH06RF", LandUse::Residential, &[(4, 1), (3, 1)]),
    ("0xJD94SJ", LandUse::Commercial, &[(1, 2), (2, 2)]),
    ("0xMQ36OL", LandUse::Commercial, &[(3, 2)]),
    ("0xLA61KJ", LandUse::Commercial, &[(4, 2)]),
    ("0xSF98RH", LandUse::Commercial, &[(3, 4), (3, 5)]),
    ("0xPK97EF", LandUse::Commercial, &[(4, 5)]),
    ("0xVG84SV", LandUse::Services, &[(6, 2), (6, 3)]),
    ("0xJE82LG", LandUse::Commercial, &[(6, 1)]),
    ("0xPF94EJ", LandUse::Commercial, &[(6, 4)]),
    ("0xCH72MF", LandUse::Commercial, &[(6, 5)]),
    ("0xWM37SU", LandUse::Commercial, &[(12, 10)]),
    ("0xFG46HT", LandUse::Residential, &[(12, 12), (13, 12), (14, 12)]),
    ("0xYJ34RH", LandUse::Services, &[(4, 4)]),
    ("0xSJ09EY", LandUse::Unused, &[(1, 0), (1, 1), (2, 0), (2, 1)]),
    ("0xCH61PF", LandUse::Unused, &[(6, 0)]),
    (
        "0xIM72AM",
        LandUse::Unused,
        &[
            (7, 0), (7, 1), (7, 2), (7, 3), (7, 4), (7, 5),
            (8, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 5),
            (9, 2), (9, 3),
        ],
    ),
    (
        "0xNN33SH",
        LandUse::Unused,
        &[
            (9, 0), (9, 1), (10, 0), (10, 1), (10, 2), (11, 0),
            (11, 1), (11, 2), (12, 0), (12, 1), (12, 2), (12, 3),
            (13, 0), (13, 1), (13, 2), (13, 3), (14, 0), (14, 1),
            (14, 2), (14, 3),
        ],
    ),
    ("0xVD09XX", LandUse::Unused, &[(13, 4), (13, 5), (14, 4), (14, 5)]),
    ("0xQW56SS", LandUse::Services, &[(1, 4), (1, 5)]),
    ("0xL88RJ", LandUse::Unused, &[(1, 6), (1, 7), (1, 8), (2, 6), (2, 7), (2, 8)]),
    ("0xIG23GS", LandUse::Unused, &[(1, 9), (1, 10), (1, 11), (2, 9), (2, 10), (2, 11)]),
    ("0xZZ45SD", LandUse::Unused, &[(1, 12), (1, 13), (1, 14), (2, 12), (2, 13), (2, 14)]),
    ("0xWX93CQ", LandUse::Unused, &[(12, 13), (12, 14), (13, 13), (13, 14), (14, 13), (14, 14)]),
];

#[rustfmt::skip]
const STANDARD_ZONING: &[(&str, ZoningCategory)] = &[
    ("0xJD94SJ", ZoningCategory::Commercial),
    ("0xMQ36OL", ZoningCategory::Commercial),
    ("0xLA61KJ", ZoningCategory::Commercial),
    ("0xSF98RH", ZoningCategory::Commercial),
    ("0xPK97EF", ZoningCategory::Commercial),
    ("0xJE82LG", ZoningCategory::Commercial),
    ("0xPF94EJ", ZoningCategory::Commercial),
    ("0xCH72MF", ZoningCategory::Commercial),
    ("0xQW56SS", ZoningCategory::Commercial),
    ("0xSB75PF", ZoningCategory::Commercial),
    ("0xYJ34RH", ZoningCategory::Commercial),
    ("0xVG84SV", ZoningCategory::Commercial),
    ("0xCH61PF", ZoningCategory::Commercial),
    ("0xIM72AM", ZoningCategory::Agricultural),
    ("0xNN33SH", ZoningCategory::Agricultural),
    ("0xL88RJ", ZoningCategory::Agricultural),
    ("0xIG23GS", ZoningCategory::Agricultural),
    ("0xZZ45SD", ZoningCategory::Agricultural),
    ("0xTY10DH", ZoningCategory::Agricultural),
    ("0xFG46HT", ZoningCategory::Agricultural),
    ("0xWX93CQ", ZoningCategory::Agricultural),
    ("0xVD09XX", ZoningCategory::Agricultural),
    ("0xAB12CD", ZoningCategory::Residential),
    ("0xDY12HS", ZoningCategory::Residential),
    ("0xUY83EH", ZoningCategory::Residential),
    ("0xDF90WM", ZoningCategory::Residential),
    ("0xKD05AY", ZoningCategory::Residential),
    ("0xNB12UF", ZoningCategory::Residential),
    ("0xGB16GT", ZoningCategory::Residential),
    ("0xEF34GH", ZoningCategory::Residential),
    ("0xSH38AG", ZoningCategory::Residential),
    ("0xEF04SH", ZoningCategory::Residential),
    ("0xKD89KF", ZoningCategory::Residential),
    ("0xFG38ZU", ZoningCategory::Residential),
    ("0xYC27EC", ZoningCategory::Residential),
    ("0xZY28RN", ZoningCategory::Residential),
    ("0xYB45SU", ZoningCategory::Residential),
    ("0xAU37EG", ZoningCategory::Residential),
    ("0xSY37EG", ZoningCategory::Residential),
    ("0xDT24EC", ZoningCategory::Residential),
    ("0xEH06RF", ZoningCategory::Residential),
    ("0xSG36AT", ZoningCategory::Residential),
    ("0xOP99AU", ZoningCategory::Residential),
    ("0xDG76QL", ZoningCategory::Residential),
    ("0xFB56HT", ZoningCategory::Residential),
    ("0xWM37SU", ZoningCategory::Residential),
    ("0xQX12KS", ZoningCategory::Residential),
    ("0xSJ09EY", ZoningCategory::Residential),
];
