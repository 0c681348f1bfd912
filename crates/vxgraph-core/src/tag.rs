//! Closed set of document element kinds.
//!
//! [`DataTag`] enumerates every data object element, with its default
//! attributes, the OpenVX object type it stands for and how its structural
//! children are labelled. [`ElementKind`] classifies any element name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A data object element tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataTag {
    /// Untyped reference accepted by `vx_reference` parameters.
    #[serde(rename = "vx_reference")]
    Reference,
    Array,
    Convolution,
    Delay,
    Distribution,
    Image,
    Lut,
    Matrix,
    ObjectArray,
    /// Channel of a multi-planar image.
    Plane,
    Pyramid,
    Remap,
    /// Region of interest of an image.
    Roi,
    Scalar,
    Threshold,
    Tensor,
    /// View of a tensor.
    View,
}

impl DataTag {
    pub const ALL: [DataTag; 17] = [
        DataTag::Reference,
        DataTag::Array,
        DataTag::Convolution,
        DataTag::Delay,
        DataTag::Distribution,
        DataTag::Image,
        DataTag::Lut,
        DataTag::Matrix,
        DataTag::ObjectArray,
        DataTag::Plane,
        DataTag::Pyramid,
        DataTag::Remap,
        DataTag::Roi,
        DataTag::Scalar,
        DataTag::Threshold,
        DataTag::Tensor,
        DataTag::View,
    ];

    /// Tags a delay slot may hold.
    pub const DELAY_CHOICES: [DataTag; 12] = [
        DataTag::Array,
        DataTag::Convolution,
        DataTag::Distribution,
        DataTag::Image,
        DataTag::Lut,
        DataTag::Matrix,
        DataTag::ObjectArray,
        DataTag::Pyramid,
        DataTag::Remap,
        DataTag::Scalar,
        DataTag::Threshold,
        DataTag::Tensor,
    ];

    /// Tags an object array may hold. Same as a delay minus nested arrays.
    pub const OBJECT_ARRAY_CHOICES: [DataTag; 11] = [
        DataTag::Array,
        DataTag::Convolution,
        DataTag::Distribution,
        DataTag::Image,
        DataTag::Lut,
        DataTag::Matrix,
        DataTag::Pyramid,
        DataTag::Remap,
        DataTag::Scalar,
        DataTag::Threshold,
        DataTag::Tensor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataTag::Reference => "vx_reference",
            DataTag::Array => "array",
            DataTag::Convolution => "convolution",
            DataTag::Delay => "delay",
            DataTag::Distribution => "distribution",
            DataTag::Image => "image",
            DataTag::Lut => "lut",
            DataTag::Matrix => "matrix",
            DataTag::ObjectArray => "object_array",
            DataTag::Plane => "plane",
            DataTag::Pyramid => "pyramid",
            DataTag::Remap => "remap",
            DataTag::Roi => "roi",
            DataTag::Scalar => "scalar",
            DataTag::Threshold => "threshold",
            DataTag::Tensor => "tensor",
            DataTag::View => "view",
        }
    }

    pub fn parse(name: &str) -> Option<DataTag> {
        DataTag::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Attributes, with values, given to a freshly created element.
    pub fn default_attributes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            DataTag::Reference | DataTag::View => &[],
            DataTag::Array => &[("elemType", "VX_TYPE_INVALID"), ("capacity", "0")],
            DataTag::Convolution => &[("rows", "3"), ("columns", "3"), ("scale", "16")],
            DataTag::Delay => &[("count", "2")],
            DataTag::Distribution => &[("bins", "16"), ("offset", "0"), ("range", "256")],
            DataTag::Image => &[("width", "32"), ("height", "32"), ("format", "U008")],
            DataTag::Lut => &[("count", "256"), ("elemType", "VX_TYPE_UINT8")],
            DataTag::Matrix => &[
                ("elemType", "VX_TYPE_FLOAT32"),
                ("columns", "3"),
                ("rows", "2"),
                ("pattern", "VX_PATTERN_OTHER"),
                ("origin_x", "1"),
                ("origin_y", "1"),
            ],
            DataTag::ObjectArray => &[("count", "1")],
            DataTag::Plane => &[("channel", "VX_CHANNEL_0")],
            DataTag::Pyramid => &[
                ("width", "32"),
                ("height", "32"),
                ("format", "U008"),
                ("scale", "0.5"),
                ("levels", "4"),
            ],
            DataTag::Remap => &[
                ("src_width", "32"),
                ("src_height", "32"),
                ("dst_width", "32"),
                ("dst_height", "32"),
            ],
            DataTag::Roi => &[("start_x", "0"), ("start_y", "0"), ("end_x", "1"), ("end_y", "1")],
            DataTag::Scalar => &[("elemType", "VX_TYPE_INVALID")],
            DataTag::Threshold => &[("input_format", "U008"), ("output_format", "U008")],
            DataTag::Tensor => &[
                ("number_of_dims", "3"),
                ("data_type", "VX_TYPE_UINT8"),
                ("fixed_point_position", "0"),
            ],
        }
    }

    /// OpenVX object type name this element stands for.
    pub fn vx_type(self) -> &'static str {
        match self {
            DataTag::Reference => "vx_reference",
            DataTag::Array => "vx_array",
            DataTag::Convolution => "vx_convolution",
            DataTag::Delay => "vx_delay",
            DataTag::Distribution => "vx_distribution",
            DataTag::Image | DataTag::Roi | DataTag::Plane => "vx_image",
            DataTag::Lut => "vx_lut",
            DataTag::Matrix => "vx_matrix",
            DataTag::ObjectArray => "vx_object_array",
            DataTag::Pyramid => "vx_pyramid",
            DataTag::Remap => "vx_remap",
            DataTag::Scalar => "vx_scalar",
            DataTag::Threshold => "vx_threshold",
            DataTag::Tensor | DataTag::View => "vx_tensor",
        }
    }

    /// The element tag used to create a new object of OpenVX type `vx_type`.
    /// `vx_image` maps to `image`, never to `roi` or `plane`.
    pub fn for_vx_type(vx_type: &str) -> Option<DataTag> {
        if vx_type == "vx_reference" {
            return Some(DataTag::Reference);
        }
        DataTag::parse(vx_type.strip_prefix("vx_")?).filter(|t| !t.is_derivation())
    }

    /// Label prefix of structural children, e.g. `Level ` for pyramid levels.
    pub fn child_label(self) -> Option<&'static str> {
        match self {
            DataTag::ObjectArray => Some("Index "),
            DataTag::Delay => Some("Slot "),
            DataTag::Pyramid => Some("Level "),
            DataTag::Image | DataTag::Roi => Some("ROI "),
            DataTag::Plane => Some("Plane "),
            DataTag::Tensor | DataTag::View => Some("View "),
            _ => None,
        }
    }

    /// Delays, object arrays and pyramids: containers whose children are
    /// numbered slots.
    pub fn is_container(self) -> bool {
        matches!(self, DataTag::Delay | DataTag::ObjectArray | DataTag::Pyramid)
    }

    /// ROIs, planes and views: objects derived from a parent image or tensor.
    pub fn is_derivation(self) -> bool {
        matches!(self, DataTag::Roi | DataTag::Plane | DataTag::View)
    }

    /// Tags that merge with each other as images.
    pub fn is_image_like(self) -> bool {
        matches!(self, DataTag::Image | DataTag::Roi | DataTag::Plane)
    }
}

impl fmt::Display for DataTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataTag::parse(s).ok_or_else(|| CoreError::UnknownTag { tag: s.to_string() })
    }
}

/// Classification of any document element by its local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// The `openvx` document root.
    Root,
    Graph,
    Node,
    /// Kernel name child of a node.
    Kernel,
    /// Node parameter, or graph parameter when the parent is a graph.
    Parameter,
    BorderConst,
    /// Tensor dimension.
    Dimension,
    Library,
    /// User struct declaration.
    Struct,
    Data(DataTag),
    /// Payload or unrecognised element.
    Other,
}

impl ElementKind {
    pub fn from_local_name(name: &str) -> ElementKind {
        match name {
            "openvx" => ElementKind::Root,
            "graph" => ElementKind::Graph,
            "node" => ElementKind::Node,
            "kernel" => ElementKind::Kernel,
            "parameter" => ElementKind::Parameter,
            "borderconst" => ElementKind::BorderConst,
            "dimension" => ElementKind::Dimension,
            "library" => ElementKind::Library,
            "struct" => ElementKind::Struct,
            other => DataTag::parse(other)
                .map(ElementKind::Data)
                .unwrap_or(ElementKind::Other),
        }
    }

    pub fn data_tag(self) -> Option<DataTag> {
        match self {
            ElementKind::Data(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_data(self) -> bool {
        matches!(self, ElementKind::Data(_))
    }

    /// Information elements registered alongside data objects.
    pub fn is_info(self) -> bool {
        matches!(self, ElementKind::Library | ElementKind::Struct)
    }
}

/// Image formats as written in documents.
pub const IMAGE_FORMATS: [&str; 14] = [
    "VIRT", "RGB2", "RGBA", "NV12", "NV21", "UYVY", "YUYV", "IYUV", "YUV4", "U008", "U016",
    "S016", "U032", "S032",
];

/// Node border modes; the first is the default.
pub const BORDER_MODES: [&str; 3] = ["UNDEFINED", "CONSTANT", "REPLICATE"];

/// Channels addressable as planes for a multi-planar image format.
pub fn image_channels(format: &str) -> &'static [&'static str] {
    match format {
        "YUV4" | "IYUV" => &["VX_CHANNEL_Y", "VX_CHANNEL_U", "VX_CHANNEL_V"],
        "NV12" | "NV21" => &["VX_CHANNEL_Y"],
        _ => &[],
    }
}

/// Image format matching a scalar element type, where one exists.
pub fn format_for_type(vx_type_label: &str) -> Option<&'static str> {
    match vx_type_label {
        "VX_TYPE_UINT8" => Some("U008"),
        "VX_TYPE_UINT16" => Some("U016"),
        "VX_TYPE_UINT32" => Some("U032"),
        "VX_TYPE_INT16" => Some("S016"),
        "VX_TYPE_INT32" => Some("S032"),
        _ => None,
    }
}
