//! Configurable list columns
//!
//! Each droplet is rendered as one line made of the configured columns in order.
//! Values are padded or truncated to the column width so lines line up under
//! [`header_line`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use droplet_dash_provider::Droplet;

const SEPARATOR: &str = "  ";
const ELLIPSIS: char = '…';

/// A droplet attribute that can be shown in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Status,
    Region,
    Size,
    PublicIpv4,
    PrivateIpv4,
    Memory,
    Vcpus,
    Disk,
    Image,
    Tags,
}

/// Columns used when the configuration does not name any.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::Name,
        Column::Status,
        Column::Region,
        Column::Size,
        Column::PublicIpv4,
    ]
}

impl Column {
    /// Header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Status => "Status",
            Self::Region => "Region",
            Self::Size => "Size",
            Self::PublicIpv4 => "Public IPv4",
            Self::PrivateIpv4 => "Private IPv4",
            Self::Memory => "Memory",
            Self::Vcpus => "vCPUs",
            Self::Disk => "Disk",
            Self::Image => "Image",
            Self::Tags => "Tags",
        }
    }

    /// Display width in characters.
    pub fn width(self) -> usize {
        match self {
            Self::Name => 24,
            Self::Status => 8,
            Self::Region => 6,
            Self::Size | Self::PrivateIpv4 => 16,
            Self::PublicIpv4 => 15,
            Self::Memory => 9,
            Self::Vcpus | Self::Disk => 6,
            Self::Image | Self::Tags => 20,
        }
    }

    /// Raw value of this column for `droplet`, before padding.
    pub fn value(self, droplet: &Droplet) -> String {
        match self {
            Self::Name => droplet.name.clone(),
            Self::Status => droplet.status.to_string(),
            Self::Region => droplet.region.slug.clone(),
            Self::Size => droplet.size_slug.clone(),
            Self::PublicIpv4 => droplet.public_ipv4().unwrap_or("-").to_string(),
            Self::PrivateIpv4 => droplet.private_ipv4().unwrap_or("-").to_string(),
            Self::Memory => format!("{} MB", droplet.memory),
            Self::Vcpus => droplet.vcpus.to_string(),
            Self::Disk => format!("{} GB", droplet.disk),
            Self::Image => {
                if droplet.image.distribution.is_empty() {
                    droplet.image.name.clone()
                } else {
                    format!("{} {}", droplet.image.distribution, droplet.image.name)
                }
            }
            Self::Tags => droplet.tags.join(","),
        }
    }
}

/// Error returned when a column name in the configuration is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column '{0}'")]
pub struct ParseColumnError(pub String);

impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' ', '.'], "_");
        let column = match normalized.as_str() {
            "name" => Self::Name,
            "status" => Self::Status,
            "region" | "region_slug" => Self::Region,
            "size" | "size_slug" => Self::Size,
            "public_ipv4" | "ip" | "ipv4" => Self::PublicIpv4,
            "private_ipv4" => Self::PrivateIpv4,
            "memory" => Self::Memory,
            "vcpus" => Self::Vcpus,
            "disk" => Self::Disk,
            "image" => Self::Image,
            "tags" => Self::Tags,
            _ => return Err(ParseColumnError(s.to_string())),
        };
        Ok(column)
    }
}

fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return format!("{value:<width$}");
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

fn join_fitted<'a>(cells: impl Iterator<Item = (Column, &'a str)>) -> String {
    let line = cells
        .map(|(column, value)| fit(value, column.width()))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    line.trim_end().to_string()
}

/// Render one droplet as a single list line.
pub fn display_line(droplet: &Droplet, columns: &[Column]) -> String {
    let values: Vec<(Column, String)> = columns.iter().map(|c| (*c, c.value(droplet))).collect();
    join_fitted(values.iter().map(|(c, v)| (*c, v.as_str())))
}

/// Header line aligned with [`display_line`].
pub fn header_line(columns: &[Column]) -> String {
    join_fitted(columns.iter().map(|c| (*c, c.title())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn droplet() -> Droplet {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "web-1",
            "status": "active",
            "memory": 2048,
            "vcpus": 2,
            "disk": 50,
            "region": { "slug": "ams3", "name": "Amsterdam 3" },
            "image": { "name": "24.04 (LTS) x64", "distribution": "Ubuntu" },
            "size_slug": "s-2vcpu-2gb",
            "networks": { "v4": [
                { "ip_address": "203.0.113.7", "type": "public" },
                { "ip_address": "10.0.0.7", "type": "private" }
            ]},
            "tags": ["web", "prod"]
        }))
        .unwrap()
    }

    #[test]
    fn values_per_column() {
        let d = droplet();
        assert_eq!(Column::Name.value(&d), "web-1");
        assert_eq!(Column::Status.value(&d), "active");
        assert_eq!(Column::Region.value(&d), "ams3");
        assert_eq!(Column::PublicIpv4.value(&d), "203.0.113.7");
        assert_eq!(Column::PrivateIpv4.value(&d), "10.0.0.7");
        assert_eq!(Column::Memory.value(&d), "2048 MB");
        assert_eq!(Column::Disk.value(&d), "50 GB");
        assert_eq!(Column::Image.value(&d), "Ubuntu 24.04 (LTS) x64");
        assert_eq!(Column::Tags.value(&d), "web,prod");
    }

    #[test]
    fn missing_address_shows_dash() {
        let d: Droplet =
            serde_json::from_str(r#"{"id":1,"name":"bare","status":"new"}"#).unwrap();
        assert_eq!(Column::PublicIpv4.value(&d), "-");
    }

    #[test]
    fn line_follows_column_order() {
        let d = droplet();
        let line = display_line(&d, &[Column::Status, Column::Name]);
        assert!(line.starts_with("active"));
        assert!(line.ends_with("web-1"));
        assert_eq!(line.find("web-1"), Some(Column::Status.width() + SEPARATOR.len()));
    }

    #[test]
    fn long_values_are_truncated() {
        let mut d = droplet();
        d.name = "a-very-long-droplet-name-that-overflows".to_string();
        let line = display_line(&d, &[Column::Name, Column::Region]);
        let name_cell: String = line.chars().take(Column::Name.width()).collect();
        assert!(name_cell.ends_with(ELLIPSIS));
        assert!(line.ends_with("ams3"));
    }

    #[test]
    fn header_aligns_with_lines() {
        let d = droplet();
        let columns = default_columns();
        let header = header_line(&columns);
        let line = display_line(&d, &columns);
        assert_eq!(header.find("Status"), line.find("active"));
    }

    #[test]
    fn empty_columns_render_empty_line() {
        assert_eq!(display_line(&droplet(), &[]), "");
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("Public-IPv4".parse::<Column>(), Ok(Column::PublicIpv4));
        assert_eq!("region.slug".parse::<Column>(), Ok(Column::Region));
        assert_eq!(
            "uptime".parse::<Column>(),
            Err(ParseColumnError("uptime".to_string()))
        );
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Column::PrivateIpv4).unwrap(),
            r#""private_ipv4""#
        );
    }
}
