//! Detail view of a single droplet

use serde::Serialize;

use droplet_dash_provider::Droplet;

/// Title plus an ordered list of labelled properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropletDetails {
    pub title: String,
    pub properties: Vec<(String, String)>,
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

impl DropletDetails {
    pub fn from_droplet(droplet: &Droplet) -> Self {
        let image = match droplet.image.slug.as_deref() {
            Some(slug) if !slug.is_empty() => format!("{} ({slug})", droplet.image.name),
            _ => droplet.image.name.clone(),
        };
        let created = droplet
            .created_at
            .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string());

        let properties = [
            ("ID", droplet.id.to_string()),
            ("Name", droplet.name.clone()),
            ("Status", droplet.status.to_string()),
            (
                "Region",
                format!("{} ({})", droplet.region.name, droplet.region.slug),
            ),
            ("Size", droplet.size_slug.clone()),
            ("vCPUs", droplet.vcpus.to_string()),
            ("Memory", format!("{} MB", droplet.memory)),
            ("Disk", format!("{} GB", droplet.disk)),
            ("Image", or_dash(Some(&image))),
            ("Public IPv4", or_dash(droplet.public_ipv4())),
            ("Private IPv4", or_dash(droplet.private_ipv4())),
            ("Public IPv6", or_dash(droplet.public_ipv6())),
            ("Features", list_or_dash(&droplet.features)),
            ("Tags", list_or_dash(&droplet.tags)),
            ("Locked", if droplet.locked { "yes" } else { "no" }.to_string()),
            ("Created", created),
            ("VPC", or_dash(droplet.vpc_uuid.as_deref())),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            title: droplet.name.clone(),
            properties,
        }
    }

    /// Value of the property labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }
}
