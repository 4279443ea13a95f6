use super::{
    AVAILABLE_MEMORY, BOOT_TIME, CPU_USAGE, CURRENT_USER, DEVICE, Entry, HOSTNAME, IP_ADDRESS,
    MAC_ADDRESS, MACHINE, MEMORY_PERCENTAGE, NODE_NAME, PHYSICAL_CORES, PROCESSOR, RELEASE, SYSTEM,
    SYSTEM_UPTIME, TOTAL_CORES, TOTAL_MEMORY, USED_MEMORY, VERSION, entries, volume_fields,
};
use crate::system::snapshot::SystemSnapshot;

/// The five fixed display categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    System,
    Cpu,
    Memory,
    Disks,
    Network,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::System,
        Category::Cpu,
        Category::Memory,
        Category::Disks,
        Category::Network,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::System => "System",
            Category::Cpu => "CPU",
            Category::Memory => "Memory",
            Category::Disks => "Disks",
            Category::Network => "Network",
        }
    }

    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Category::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Category::ALL[(self.index() + 1) % Category::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Category::ALL.len();
        Category::ALL[(self.index() + len - 1) % len]
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cpu" => Category::Cpu,
            "memory" | "mem" => Category::Memory,
            "disks" | "disk" => Category::Disks,
            "network" | "net" => Category::Network,
            _ => Category::System,
        }
    }

    /// Static membership list. Disks has none: it is a tree, not rows.
    fn members(self) -> &'static [&'static str] {
        match self {
            Category::System => &[
                SYSTEM,
                NODE_NAME,
                RELEASE,
                VERSION,
                MACHINE,
                PROCESSOR,
                BOOT_TIME,
                CURRENT_USER,
                SYSTEM_UPTIME,
            ],
            Category::Cpu => &[PHYSICAL_CORES, TOTAL_CORES, CPU_USAGE],
            Category::Memory => &[TOTAL_MEMORY, AVAILABLE_MEMORY, USED_MEMORY, MEMORY_PERCENTAGE],
            Category::Network => &[HOSTNAME, IP_ADDRESS, MAC_ADDRESS],
            Category::Disks => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: &'static str,
    pub value: String,
}

/// A volume parent node, labelled by device, with its other fields as
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeNode {
    pub device: String,
    pub fields: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayModel {
    pub system: Vec<Row>,
    pub cpu: Vec<Row>,
    pub memory: Vec<Row>,
    pub network: Vec<Row>,
    pub disks: Vec<VolumeNode>,
}

impl DisplayModel {
    /// Flat rows of a category. Empty for `Disks`.
    pub fn rows(&self, category: Category) -> &[Row] {
        match category {
            Category::System => &self.system,
            Category::Cpu => &self.cpu,
            Category::Memory => &self.memory,
            Category::Network => &self.network,
            Category::Disks => &[],
        }
    }

    /// Number of display lines a category occupies, tree children included.
    pub fn line_count(&self, category: Category) -> usize {
        match category {
            Category::Disks => self.disks.iter().map(|d| 1 + d.fields.len()).sum(),
            other => self.rows(other).len(),
        }
    }

    fn rows_mut(&mut self, category: Category) -> Option<&mut Vec<Row>> {
        match category {
            Category::System => Some(&mut self.system),
            Category::Cpu => Some(&mut self.cpu),
            Category::Memory => Some(&mut self.memory),
            Category::Network => Some(&mut self.network),
            Category::Disks => None,
        }
    }
}

/// Distributes the snapshot's properties into the fixed categories. A
/// property no category lists is dropped.
pub fn render(snapshot: &SystemSnapshot) -> DisplayModel {
    #[cfg(feature = "trace-log")]
    let _render_span = tracing::debug_span!("present.render").entered();

    let mut model = DisplayModel::default();

    for entry in entries(snapshot) {
        match entry {
            Entry::Scalar(name, value) => {
                let Some(category) = Category::ALL
                    .into_iter()
                    .find(|c| c.members().contains(&name))
                else {
                    continue;
                };
                if let Some(rows) = model.rows_mut(category) {
                    rows.push(Row { name, value });
                }
            }
            Entry::Disks(volumes) => {
                model.disks = volumes
                    .iter()
                    .map(|volume| VolumeNode {
                        device: volume.device.clone(),
                        fields: volume_fields(volume)
                            .into_iter()
                            .filter(|(name, _)| *name != DEVICE)
                            .map(|(name, value)| Row { name, value })
                            .collect(),
                    })
                    .collect();
            }
        }
    }

    model
}
