//! Carbon Intensity 區域與 COVID-19 地區名稱的對照表。
//!
//! 表格在編譯期固定，執行期間只讀，可以在任意數量的請求間共享。

use std::fmt;

struct RegionEntry {
    id: &'static str,
    nation: &'static str,
    area_name: &'static str,
}

// nation 名稱保持小寫，COVID API 的 nation 查詢以此為準
const REGIONS: [RegionEntry; 17] = [
    RegionEntry { id: "1", nation: "scotland", area_name: "North Scotland" },
    RegionEntry { id: "2", nation: "scotland", area_name: "South Scotland" },
    RegionEntry { id: "3", nation: "england", area_name: "North West England" },
    RegionEntry { id: "4", nation: "england", area_name: "North East England" },
    RegionEntry { id: "5", nation: "england", area_name: "Yorkshire" },
    RegionEntry { id: "6", nation: "wales", area_name: "North Wales" },
    RegionEntry { id: "7", nation: "wales", area_name: "South Wales" },
    RegionEntry { id: "8", nation: "england", area_name: "West Midlands" },
    RegionEntry { id: "9", nation: "england", area_name: "East Midlands" },
    RegionEntry { id: "10", nation: "england", area_name: "East England" },
    RegionEntry { id: "11", nation: "england", area_name: "South West England" },
    RegionEntry { id: "12", nation: "england", area_name: "South England" },
    RegionEntry { id: "13", nation: "england", area_name: "London" },
    RegionEntry { id: "14", nation: "england", area_name: "South East England" },
    RegionEntry { id: "15", nation: "england", area_name: "England" },
    RegionEntry { id: "16", nation: "scotland", area_name: "Scotland" },
    RegionEntry { id: "17", nation: "wales", area_name: "Wales" },
];

/// A validated Carbon Intensity region identifier.
///
/// Only obtainable through [`RegionId::parse`], so every value has both a
/// nation name and a detailed area name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

impl RegionId {
    /// Exact match against the known identifiers ("1" through "17").
    pub fn parse(raw: &str) -> Option<Self> {
        REGIONS.iter().position(|entry| entry.id == raw).map(RegionId)
    }

    pub fn as_str(&self) -> &'static str {
        REGIONS[self.0].id
    }

    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = RegionId> {
        (0..REGIONS.len()).map(RegionId)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct RegionCatalog;

impl RegionCatalog {
    pub fn nation_of(region: RegionId) -> &'static str {
        REGIONS[region.0].nation
    }

    pub fn area_name_of(region: RegionId) -> &'static str {
        REGIONS[region.0].area_name
    }
}
