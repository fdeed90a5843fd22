use serde::{Deserialize, Serialize};

/// Colors cycled through by successive ORF groups on the map.
pub const ORF_PALETTE: [&str; 3] = ["#FF8C7A", "#F4C542", "#C97AF4"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Backbone,
    Promoter,
    Orf,
    Linker,
    Regulatory,
}

impl SlotCategory {
    /// Categories the user can fill from the catalog, in map order.
    pub const EDITABLE: [SlotCategory; 4] = [
        SlotCategory::Promoter,
        SlotCategory::Orf,
        SlotCategory::Linker,
        SlotCategory::Regulatory,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "backbone" => Some(SlotCategory::Backbone),
            "promoter" => Some(SlotCategory::Promoter),
            "orf" | "cds" => Some(SlotCategory::Orf),
            "linker" => Some(SlotCategory::Linker),
            "regulatory" => Some(SlotCategory::Regulatory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Backbone => "backbone",
            SlotCategory::Promoter => "promoter",
            SlotCategory::Orf => "orf",
            SlotCategory::Linker => "linker",
            SlotCategory::Regulatory => "regulatory",
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self, SlotCategory::Backbone)
    }

    /// Length given to an empty slot of this category so it still shows up
    /// on the map.
    pub fn placeholder_length(&self) -> usize {
        match self {
            SlotCategory::Linker => 20,
            SlotCategory::Backbone
            | SlotCategory::Promoter
            | SlotCategory::Orf
            | SlotCategory::Regulatory => 30,
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            SlotCategory::Backbone => "#9CA3AF",
            SlotCategory::Promoter => "#F49BC1",
            SlotCategory::Orf => ORF_PALETTE[0],
            SlotCategory::Linker => "#A9E2F3",
            SlotCategory::Regulatory => "#7ED957",
        }
    }

    /// Short name used in catalog picker titles ("Select from ORF Database").
    pub fn catalog_title(&self) -> &'static str {
        match self {
            SlotCategory::Backbone => "Backbone",
            SlotCategory::Promoter => "Promoter",
            SlotCategory::Orf => "ORF",
            SlotCategory::Linker => "Linker",
            SlotCategory::Regulatory => "Regulatory",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            SlotCategory::Backbone => "Backbone Elements",
            SlotCategory::Promoter => "Promoters",
            SlotCategory::Orf => "ORFs",
            SlotCategory::Linker => "Linkers",
            SlotCategory::Regulatory => "Regulatory Elements",
        }
    }

    /// Annotation type shown in the component table when neither the slot
    /// nor its catalog entry names a more specific one.
    pub fn default_feature_type(&self) -> &'static str {
        match self {
            SlotCategory::Backbone => "Backbone",
            SlotCategory::Promoter => "Promoter",
            SlotCategory::Orf => "CDS",
            SlotCategory::Linker => "Linker",
            SlotCategory::Regulatory => "Regulatory",
        }
    }
}

impl std::fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display-only strand annotation. It never affects layout or synthesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    #[default]
    Forward,
    Reverse,
}

impl Strand {
    pub fn is_reverse(&self) -> bool {
        *self == Strand::Reverse
    }
}

/// One segment of the vector map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub category: SlotCategory,
    pub label: String,
    #[serde(default)]
    pub assigned_name: Option<String>,
    pub color: String,
    pub length: usize,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub strand: Strand,
    /// Annotation type override for backbone elements (e.g. "Rep_origin").
    #[serde(default)]
    pub feature_type: Option<String>,
    /// 1-based ORF/linker group number, used in placeholder labels.
    #[serde(default)]
    pub ordinal: Option<usize>,
    /// 1-based step number among editable slots.
    #[serde(default)]
    pub step: Option<usize>,
}

impl Slot {
    /// A fixed backbone element.
    pub fn backbone(id: impl Into<String>, label: impl Into<String>, length: usize) -> Self {
        Self {
            id: id.into(),
            category: SlotCategory::Backbone,
            label: label.into(),
            assigned_name: None,
            color: SlotCategory::Backbone.default_color().to_string(),
            length,
            fixed: true,
            strand: Strand::Forward,
            feature_type: None,
            ordinal: None,
            step: None,
        }
    }

    /// An empty, user-assignable slot.
    pub fn editable(id: impl Into<String>, category: SlotCategory, ordinal: Option<usize>) -> Self {
        let color = match (category, ordinal) {
            (SlotCategory::Orf, Some(n)) => ORF_PALETTE[(n.max(1) - 1) % ORF_PALETTE.len()],
            _ => category.default_color(),
        };
        let mut slot = Self {
            id: id.into(),
            category,
            label: String::new(),
            assigned_name: None,
            color: color.to_string(),
            length: category.placeholder_length(),
            fixed: false,
            strand: Strand::Forward,
            feature_type: None,
            ordinal,
            step: None,
        };
        slot.label = slot.placeholder_label();
        slot
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    pub fn with_feature_type(mut self, feature_type: impl Into<String>) -> Self {
        self.feature_type = Some(feature_type.into());
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_name.is_some()
    }

    /// Label an empty slot shows on the map.
    pub fn placeholder_label(&self) -> String {
        let ordinal = self.ordinal.map(|n| format!(" #{}", n)).unwrap_or_default();
        match self.category {
            SlotCategory::Backbone => self.label.clone(),
            SlotCategory::Promoter => "Add Promoter".to_string(),
            SlotCategory::Orf => format!("Add ORF{}", ordinal),
            SlotCategory::Linker => format!("Add Linker{}", ordinal),
            SlotCategory::Regulatory => "Add Regulatory Element".to_string(),
        }
    }

    /// Label shown once a catalog part has been picked for the slot.
    pub fn assigned_label(&self, name: &str) -> String {
        match self.category {
            SlotCategory::Promoter => format!("Promoter - {}", name),
            _ => name.to_string(),
        }
    }

    /// The assigned part name if any, otherwise the label.
    pub fn display_name(&self) -> &str {
        self.assigned_name.as_deref().unwrap_or(&self.label)
    }

    pub fn feature_type_label(&self) -> &str {
        self.feature_type
            .as_deref()
            .unwrap_or_else(|| self.category.default_feature_type())
    }
}
