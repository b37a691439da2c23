// AdInsights - GPL-3.0-or-later
// This file is part of AdInsights.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// AdInsights is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// AdInsights is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with AdInsights.  If not, see <https://www.gnu.org/licenses/>.

mod anomaly_table;
mod filter_bar;
mod tag_cloud;

pub use anomaly_table::{result_count_label, AnomalyTable, AnomalyTableEvent, ReasonSeverity};
pub use filter_bar::{user_option_label, FilterBar, FilterBarEvent};
pub use tag_cloud::{tag_text, TagCloud};
