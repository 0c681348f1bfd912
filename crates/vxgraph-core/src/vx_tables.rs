//! Declarative descriptor data for the standard OpenVX types.
//!
//! [`TypeRegistry::new`](crate::type_registry::TypeRegistry::new) builds its
//! tables from these slices in declaration order: constants first, since the
//! bitfield-composed kinds look up their vendor and secondary ids there.

/// Constant table whose values are given literally.
pub(crate) struct ConstantTable {
    pub name: &'static str,
    pub values: &'static [(&'static str, u32)],
}

/// Bitfield-composed table: `vendor<<20 | secondary<<shift | first + i`.
pub(crate) struct SequenceTable {
    pub name: &'static str,
    pub vendor: &'static str,
    /// Label looked up in `vx_type_e`, `vx_enum_e` or `vx_library_e`
    /// depending on the table kind.
    pub secondary: &'static str,
    pub first: u32,
    pub labels: &'static [&'static str],
}

pub(crate) const KHRONOS: &str = "VX_ID_KHRONOS";

pub(crate) const CONSTANTS: &[ConstantTable] = &[
    ConstantTable {
        name: "vx_library_e",
        values: &[
            ("VX_LIBRARY_KHR_BASE", 0x0),
            ("VX_LIBRARY_NN_EXTENSION", 0x1),
            ("VX_LIBRARY_KHR_CLASSIFIER_EXTENSION", 0x2),
        ],
    },
    ConstantTable {
        name: "vx_vendor_id_e",
        values: &[
            ("VX_ID_KHRONOS", 0x000),
            ("VX_ID_TI", 0x001),
            ("VX_ID_QUALCOMM", 0x002),
            ("VX_ID_NVIDIA", 0x003),
            ("VX_ID_ARM", 0x004),
            ("VX_ID_BDTI", 0x005),
            ("VX_ID_RENESAS", 0x006),
            ("VX_ID_VIVANTE", 0x007),
            ("VX_ID_XILINX", 0x008),
            ("VX_ID_AXIS", 0x009),
            ("VX_ID_MOVIDIUS", 0x00A),
            ("VX_ID_SAMSUNG", 0x00B),
            ("VX_ID_FREESCALE", 0x00C),
            ("VX_ID_AMD", 0x00D),
            ("VX_ID_BROADCOM", 0x00E),
            ("VX_ID_INTEL", 0x00F),
            ("VX_ID_MARVELL", 0x010),
            ("VX_ID_MEDIATEK", 0x011),
            ("VX_ID_ST", 0x012),
            ("VX_ID_CEVA", 0x013),
            ("VX_ID_ITSEEZ", 0x014),
            ("VX_ID_IMAGINATION", 0x015),
            ("VX_ID_NXP", 0x016),
            ("VX_ID_VIDEANTIS", 0x017),
            ("VX_ID_SYNOPSYS", 0x018),
            ("VX_ID_CADENCE", 0x019),
            ("VX_ID_HUAWEI", 0x01A),
            ("VX_ID_SOCIONEXT", 0x01B),
        ],
    },
    ConstantTable {
        name: "vx_type_e",
        values: &[
            ("VX_TYPE_INVALID", 0),
            ("VX_TYPE_CHAR", 1),
            ("VX_TYPE_INT8", 2),
            ("VX_TYPE_UINT8", 3),
            ("VX_TYPE_INT16", 4),
            ("VX_TYPE_UINT16", 5),
            ("VX_TYPE_INT32", 6),
            ("VX_TYPE_UINT32", 7),
            ("VX_TYPE_INT64", 8),
            ("VX_TYPE_UINT64", 9),
            ("VX_TYPE_FLOAT32", 10),
            ("VX_TYPE_FLOAT64", 11),
            ("VX_TYPE_ENUM", 12),
            ("VX_TYPE_SIZE", 13),
            ("VX_TYPE_DF_IMAGE", 14),
            ("VX_TYPE_FLOAT16", 15),
            ("VX_TYPE_BOOL", 16),
            ("VX_TYPE_RECTANGLE", 0x20),
            ("VX_TYPE_KEYPOINT", 0x21),
            ("VX_TYPE_COORDINATES2D", 0x22),
            ("VX_TYPE_COORDINATES3D", 0x23),
            ("VX_TYPE_COORDINATES2DF", 0x24),
            ("VX_TYPE_NN_CONVOLUTION_PARAMS", 0x25),
            ("VX_TYPE_NN_DECONVOLUTION_PARAMS", 0x26),
            ("VX_TYPE_NN_ROI_POOL_PARAMS", 0x27),
            ("VX_TYPE_HOG_PARAMS", 0x28),
            ("VX_TYPE_HOUGH_LINES_PARAMS", 0x29),
            ("VX_TYPE_LINE_2D", 0x2A),
            ("VX_TYPE_TENSOR_MATRIX_MULTIPLY_PARAMS", 0x2B),
            ("VX_TYPE_CLASSIFIER_MODEL", 0x2C),
            ("VX_TYPE_REFERENCE", 0x800),
            ("VX_TYPE_CONTEXT", 0x801),
            ("VX_TYPE_GRAPH", 0x802),
            ("VX_TYPE_NODE", 0x803),
            ("VX_TYPE_KERNEL", 0x804),
            ("VX_TYPE_PARAMETER", 0x805),
            ("VX_TYPE_DELAY", 0x806),
            ("VX_TYPE_LUT", 0x807),
            ("VX_TYPE_DISTRIBUTION", 0x808),
            ("VX_TYPE_PYRAMID", 0x809),
            ("VX_TYPE_THRESHOLD", 0x80A),
            ("VX_TYPE_MATRIX", 0x80B),
            ("VX_TYPE_CONVOLUTION", 0x80C),
            ("VX_TYPE_SCALAR", 0x80D),
            ("VX_TYPE_ARRAY", 0x80E),
            ("VX_TYPE_IMAGE", 0x80F),
            ("VX_TYPE_REMAP", 0x810),
            ("VX_TYPE_OBJECT_ARRAY", 0x813),
            ("VX_TYPE_TENSOR", 0x815),
        ],
    },
    ConstantTable {
        name: "vx_enum_e",
        values: &[
            ("VX_ENUM_DIRECTION", 0x00),
            ("VX_ENUM_ACTION", 0x01),
            ("VX_ENUM_HINT", 0x02),
            ("VX_ENUM_DIRECTIVE", 0x03),
            ("VX_ENUM_INTERPOLATION", 0x04),
            ("VX_ENUM_OVERFLOW", 0x05),
            ("VX_ENUM_COLOR_SPACE", 0x06),
            ("VX_ENUM_COLOR_RANGE", 0x07),
            ("VX_ENUM_PARAMETER_STATE", 0x08),
            ("VX_ENUM_CHANNEL", 0x09),
            ("VX_ENUM_CONVERT_POLICY", 0x0A),
            ("VX_ENUM_THRESHOLD_TYPE", 0x0B),
            ("VX_ENUM_BORDER", 0x0C),
            ("VX_ENUM_COMPARISON", 0x0D),
            ("VX_ENUM_MEMORY_TYPE", 0x0E),
            ("VX_ENUM_TERM_CRITERIA", 0x0F),
            ("VX_ENUM_NORM_TYPE", 0x10),
            ("VX_ENUM_ACCESSOR", 0x11),
            ("VX_ENUM_ROUND_POLICY", 0x12),
            ("VX_ENUM_TARGET", 0x13),
            ("VX_ENUM_BORDER_POLICY", 0x14),
            ("VX_ENUM_GRAPH_STATE", 0x15),
            ("VX_ENUM_NONLINEAR", 0x16),
            ("VX_ENUM_PATTERN", 0x17),
            ("VX_ENUM_LBP_FORMAT", 0x18),
            ("VX_ENUM_COMP_METRIC", 0x19),
            ("VX_ENUM_NN_ROUNDING_TYPE", 0x1A),
            ("VX_ENUM_NN_POOLING_TYPE", 0x1B),
            ("VX_ENUM_NN_NORMALIZATION_TYPE", 0x1C),
            ("VX_ENUM_NN_ACTIVATION_FUNCTION_TYPE", 0x1D),
            ("VX_ENUM_CLASSIFIER_MODEL", 0x1E),
            ("VX_ENUM_IX_USE", 0x1F),
            ("VX_ENUM_SCALAR_OPERATION", 0x20),
        ],
    },
];

/// `vx_df_image_e`: values are the big-endian packing of the code.
pub(crate) const DF_IMAGE_CODES: &[(&str, &str)] = &[
    ("VX_DF_IMAGE_VIRT", "VIRT"),
    ("VX_DF_IMAGE_RGB", "RGB2"),
    ("VX_DF_IMAGE_RGBX", "RGBA"),
    ("VX_DF_IMAGE_NV12", "NV12"),
    ("VX_DF_IMAGE_NV21", "NV21"),
    ("VX_DF_IMAGE_UYVY", "UYVY"),
    ("VX_DF_IMAGE_YUYV", "YUYV"),
    ("VX_DF_IMAGE_IYUV", "IYUV"),
    ("VX_DF_IMAGE_YUV4", "YUV4"),
    ("VX_DF_IMAGE_U8", "U008"),
    ("VX_DF_IMAGE_U16", "U016"),
    ("VX_DF_IMAGE_S16", "S016"),
    ("VX_DF_IMAGE_U32", "U032"),
    ("VX_DF_IMAGE_S32", "S032"),
];

/// Attribute tables; `secondary` is a `vx_type_e` label.
pub(crate) const ATTRIBUTES: &[SequenceTable] = &[
    SequenceTable {
        name: "vx_delay_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_DELAY",
        first: 0,
        labels: &["VX_DELAY_TYPE", "VX_DELAY_SLOTS"],
    },
    SequenceTable {
        name: "vx_lut_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_LUT",
        first: 0,
        labels: &["VX_LUT_TYPE", "VX_LUT_COUNT", "VX_LUT_SIZE", "VX_LUT_OFFSET"],
    },
    SequenceTable {
        name: "vx_pyramid_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_PYRAMID",
        first: 0,
        labels: &[
            "VX_PYRAMID_LEVELS",
            "VX_PYRAMID_SCALE",
            "VX_PYRAMID_WIDTH",
            "VX_PYRAMID_HEIGHT",
            "VX_PYRAMID_FORMAT",
        ],
    },
    SequenceTable {
        name: "vx_distribution_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_DISTRIBUTION",
        first: 0,
        labels: &[
            "VX_DISTRIBUTION_DIMENSIONS",
            "VX_DISTRIBUTION_OFFSET",
            "VX_DISTRIBUTION_RANGE",
            "VX_DISTRIBUTION_BINS",
            "VX_DISTRIBUTION_WINDOW",
            "VX_DISTRIBUTION_SIZE",
        ],
    },
    SequenceTable {
        name: "vx_threshold_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_THRESHOLD",
        first: 0,
        labels: &[
            "VX_THRESHOLD_TYPE",
            "VX_THRESHOLD_THRESHOLD_VALUE",
            "VX_THRESHOLD_THRESHOLD_LOWER",
            "VX_THRESHOLD_THRESHOLD_UPPER",
            "VX_THRESHOLD_TRUE_VALUE",
            "VX_THRESHOLD_FALSE_VALUE",
            "VX_THRESHOLD_DATA_TYPE",
            "VX_THRESHOLD_INPUT_FORMAT",
            "VX_THRESHOLD_OUTPUT_FORMAT",
        ],
    },
    SequenceTable {
        name: "vx_matrix_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_MATRIX",
        first: 0,
        labels: &[
            "VX_MATRIX_TYPE",
            "VX_MATRIX_ROWS",
            "VX_MATRIX_COLUMNS",
            "VX_MATRIX_SIZE",
            "VX_MATRIX_ORIGIN",
            "VX_MATRIX_PATTERN",
        ],
    },
    SequenceTable {
        name: "vx_convolution_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_CONVOLUTION",
        first: 0,
        labels: &[
            "VX_CONVOLUTION_ROWS",
            "VX_CONVOLUTION_COLUMNS",
            "VX_CONVOLUTION_SCALE",
            "VX_CONVOLUTION_SIZE",
        ],
    },
    SequenceTable {
        name: "vx_scalar_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_SCALAR",
        first: 0,
        labels: &["VX_SCALAR_TYPE"],
    },
    SequenceTable {
        name: "vx_array_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_ARRAY",
        first: 0,
        labels: &[
            "VX_ARRAY_ITEMTYPE",
            "VX_ARRAY_NUMITEMS",
            "VX_ARRAY_CAPACITY",
            "VX_ARRAY_ITEMSIZE",
        ],
    },
    SequenceTable {
        name: "vx_image_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_IMAGE",
        first: 0,
        labels: &[
            "VX_IMAGE_WIDTH",
            "VX_IMAGE_HEIGHT",
            "VX_IMAGE_FORMAT",
            "VX_IMAGE_PLANES",
            "VX_IMAGE_SPACE",
            "VX_IMAGE_RANGE",
            "VX_IMAGE_SIZE",
            "VX_IMAGE_MEMORY_TYPE",
            "VX_IMAGE_IS_UNIFORM",
            "VX_IMAGE_UNIFORM_VALUE",
        ],
    },
    SequenceTable {
        name: "vx_remap_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_REMAP",
        first: 0,
        labels: &[
            "VX_REMAP_SOURCE_WIDTH",
            "VX_REMAP_SOURCE_HEIGHT",
            "VX_REMAP_DESTINATION_WIDTH",
            "VX_REMAP_DESTINATION_HEIGHT",
        ],
    },
    SequenceTable {
        name: "vx_object_array_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_OBJECT_ARRAY",
        first: 0,
        labels: &["VX_OBJECT_ARRAY_ITEMTYPE", "VX_OBJECT_ARRAY_NUMITEMS"],
    },
    SequenceTable {
        name: "vx_tensor_attribute_e",
        vendor: KHRONOS,
        secondary: "VX_TYPE_TENSOR",
        first: 0,
        labels: &[
            "VX_TENSOR_NUMBER_OF_DIMS",
            "VX_TENSOR_DIMS",
            "VX_TENSOR_DATA_TYPE",
            "VX_TENSOR_FIXED_POINT_POSITION",
        ],
    },
];

/// Enum tables; `secondary` is a `vx_enum_e` label.
pub(crate) const ENUMS: &[SequenceTable] = &[
    SequenceTable {
        name: "vx_threshold_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_THRESHOLD_TYPE",
        first: 0,
        labels: &["VX_THRESHOLD_TYPE_BINARY", "VX_THRESHOLD_TYPE_RANGE"],
    },
    SequenceTable {
        name: "vx_pattern_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_PATTERN",
        first: 0,
        labels: &["VX_PATTERN_BOX", "VX_PATTERN_CROSS", "VX_PATTERN_DISK", "VX_PATTERN_OTHER"],
    },
    SequenceTable {
        name: "vx_color_space_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_COLOR_SPACE",
        first: 0,
        labels: &[
            "VX_COLOR_SPACE_NONE",
            "VX_COLOR_SPACE_BT601_525",
            "VX_COLOR_SPACE_BT601_625",
            "VX_COLOR_SPACE_BT709",
            "VX_COLOR_SPACE_DEFAULT",
        ],
    },
    SequenceTable {
        name: "vx_channel_range_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_COLOR_RANGE",
        first: 0,
        labels: &["VX_CHANNEL_RANGE_FULL", "VX_CHANNEL_RANGE_RESTRICTED"],
    },
    SequenceTable {
        name: "vx_memory_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_MEMORY_TYPE",
        first: 0,
        labels: &["VX_MEMORY_TYPE_NONE", "VX_MEMORY_TYPE_HOST"],
    },
    SequenceTable {
        name: "vx_convert_policy_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_CONVERT_POLICY",
        first: 0,
        labels: &["VX_CONVERT_POLICY_WRAP", "VX_CONVERT_POLICY_SATURATE"],
    },
    SequenceTable {
        name: "vx_round_policy_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_ROUND_POLICY",
        first: 0,
        labels: &["VX_ROUND_POLICY_TO_ZERO", "VX_ROUND_POLICY_TO_NEAREST_EVEN"],
    },
    SequenceTable {
        name: "vx_termination_criteria_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_TERM_CRITERIA",
        first: 0,
        labels: &[
            "VX_TERM_CRITERIA_ITERATIONS",
            "VX_TERM_CRITERIA_EPSILON",
            "VX_TERM_CRITERIA_BOTH",
        ],
    },
    SequenceTable {
        name: "vx_non_linear_filter_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_NONLINEAR",
        first: 0,
        labels: &[
            "VX_NONLINEAR_FILTER_MEDIAN",
            "VX_NONLINEAR_FILTER_MIN",
            "VX_NONLINEAR_FILTER_MAX",
        ],
    },
    SequenceTable {
        name: "vx_interpolation_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_INTERPOLATION",
        first: 0,
        labels: &[
            "VX_INTERPOLATION_NEAREST_NEIGHBOR",
            "VX_INTERPOLATION_BILINEAR",
            "VX_INTERPOLATION_AREA",
        ],
    },
    SequenceTable {
        name: "vx_lbp_format_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_LBP_FORMAT",
        first: 0,
        labels: &["VX_LBP", "VX_MLBP", "VX_ULBP"],
    },
    SequenceTable {
        name: "vx_norm_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_NORM_TYPE",
        first: 0,
        labels: &["VX_NORM_L1", "VX_NORM_L2"],
    },
    SequenceTable {
        name: "vx_channel_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_CHANNEL",
        first: 0,
        labels: &[
            "VX_CHANNEL_0",
            "VX_CHANNEL_1",
            "VX_CHANNEL_2",
            "VX_CHANNEL_3",
            "VX_CHANNEL_R",
            "VX_CHANNEL_G",
            "VX_CHANNEL_B",
            "VX_CHANNEL_A",
            "VX_CHANNEL_Y",
            "VX_CHANNEL_U",
            "VX_CHANNEL_V",
        ],
    },
    SequenceTable {
        name: "vx_scalar_operation_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_SCALAR_OPERATION",
        first: 0,
        labels: &[
            "VX_SCALAR_OP_AND",
            "VX_SCALAR_OP_OR",
            "VX_SCALAR_OP_XOR",
            "VX_SCALAR_OP_NAND",
            "VX_SCALAR_OP_EQUAL",
            "VX_SCALAR_OP_NOTEQUAL",
            "VX_SCALAR_OP_LESS",
            "VX_SCALAR_OP_LESSEQ",
            "VX_SCALAR_OP_GREATER",
            "VX_SCALAR_OP_GREATEREQ",
            "VX_SCALAR_OP_ADD",
            "VX_SCALAR_OP_SUBTRACT",
            "VX_SCALAR_OP_MULTIPLY",
            "VX_SCALAR_OP_DIVIDE",
            "VX_SCALAR_OP_MODULUS",
            "VX_SCALAR_OP_MIN",
            "VX_SCALAR_OP_MAX",
        ],
    },
    SequenceTable {
        name: "vx_comp_metric_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_COMP_METRIC",
        first: 0,
        labels: &[
            "VX_COMPARE_HAMMING",
            "VX_COMPARE_L1",
            "VX_COMPARE_L2",
            "VX_COMPARE_CCORR",
            "VX_COMPARE_L2_NORM",
            "VX_COMPARE_CCORR_NORM",
        ],
    },
    SequenceTable {
        name: "vx_border_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_BORDER",
        first: 0,
        labels: &["VX_BORDER_UNDEFINED", "VX_BORDER_CONSTANT", "VX_BORDER_REPLICATE"],
    },
    SequenceTable {
        name: "vx_direction_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_DIRECTION",
        first: 0,
        labels: &["VX_INPUT", "VX_OUTPUT", "VX_BIDIRECTIONAL"],
    },
    SequenceTable {
        name: "vx_hint_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_HINT",
        first: 0,
        labels: &[
            "VX_HINT_PERFORMANCE_DEFAULT",
            "VX_HINT_PERFORMANCE_LOW_POWER",
            "VX_HINT_PERFORMANCE_HIGH_SPEED",
        ],
    },
    SequenceTable {
        name: "vx_graph_state_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_GRAPH_STATE",
        first: 0,
        labels: &[
            "VX_GRAPH_STATE_UNVERIFIED",
            "VX_GRAPH_STATE_VERIFIED",
            "VX_GRAPH_STATE_RUNNING",
            "VX_GRAPH_STATE_ABANDONED",
            "VX_GRAPH_STATE_COMPLETED",
        ],
    },
    SequenceTable {
        name: "vx_directive_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_DIRECTIVE",
        first: 0,
        labels: &[
            "VX_DIRECTIVE_DISABLE_LOGGING",
            "VX_DIRECTIVE_ENABLE_LOGGING",
            "VX_DIRECTIVE_DISABLE_PERFORMANCE",
            "VX_DIRECTIVE_ENABLE_PERFORMANCE",
        ],
    },
    SequenceTable {
        name: "vx_action_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_ACTION",
        first: 0,
        labels: &["VX_ACTION_CONTINUE", "VX_ACTION_ABANDON"],
    },
    SequenceTable {
        name: "vx_ix_use_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_IX_USE",
        first: 0,
        labels: &[
            "VX_IX_USE_APPLICATION_CREATE",
            "VX_IX_USE_EXPORT_VALUES",
            "VX_IX_USE_NO_EXPORT_VALUES",
        ],
    },
    SequenceTable {
        name: "vx_nn_rounding_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_NN_ROUNDING_TYPE",
        first: 0,
        labels: &["VX_NN_DS_SIZE_ROUNDING_FLOOR", "VX_NN_DS_SIZE_ROUNDING_CEILING"],
    },
    SequenceTable {
        name: "vx_nn_pooling_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_NN_POOLING_TYPE",
        first: 0,
        labels: &["VX_NN_POOLING_MAX", "VX_NN_POOLING_AVG"],
    },
    SequenceTable {
        name: "vx_nn_norm_type_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_NN_NORMALIZATION_TYPE",
        first: 0,
        labels: &["VX_NN_NORMALIZATION_SAME_MAP", "VX_NN_NORMALIZATION_ACROSS_MAPS"],
    },
    SequenceTable {
        name: "vx_nn_activation_function_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_NN_ACTIVATION_FUNCTION_TYPE",
        first: 0,
        labels: &[
            "VX_NN_ACTIVATION_LOGISTIC",
            "VX_NN_ACTIVATION_HYPERBOLIC_TAN",
            "VX_NN_ACTIVATION_RELU",
            "VX_NN_ACTIVATION_BRELU",
            "VX_NN_ACTIVATION_SOFTRELU",
            "VX_NN_ACTIVATION_ABS",
            "VX_NN_ACTIVATION_SQUARE",
            "VX_NN_ACTIVATION_SQRT",
            "VX_NN_ACTIVATION_LINEAR",
        ],
    },
    SequenceTable {
        name: "vx_classifier_model_format_e",
        vendor: KHRONOS,
        secondary: "VX_ENUM_CLASSIFIER_MODEL",
        first: 0,
        labels: &["VX_CLASSIFIER_MODEL_UNDEFINED"],
    },
];

/// Kernel id tables; `secondary` is a `vx_library_e` label.
pub(crate) const KERNEL_IDS: &[SequenceTable] = &[
    SequenceTable {
        name: "vx_kernel_e",
        vendor: KHRONOS,
        secondary: "VX_LIBRARY_KHR_BASE",
        first: 1,
        labels: &[
            "VX_KERNEL_COLOR_CONVERT",
            "VX_KERNEL_CHANNEL_EXTRACT",
            "VX_KERNEL_CHANNEL_COMBINE",
            "VX_KERNEL_SOBEL_3x3",
            "VX_KERNEL_MAGNITUDE",
            "VX_KERNEL_PHASE",
            "VX_KERNEL_SCALE_IMAGE",
            "VX_KERNEL_TABLE_LOOKUP",
            "VX_KERNEL_HISTOGRAM",
            "VX_KERNEL_EQUALIZE_HISTOGRAM",
            "VX_KERNEL_ABSDIFF",
            "VX_KERNEL_MEAN_STDDEV",
            "VX_KERNEL_THRESHOLD",
            "VX_KERNEL_INTEGRAL_IMAGE",
            "VX_KERNEL_DILATE_3x3",
            "VX_KERNEL_ERODE_3x3",
            "VX_KERNEL_MEDIAN_3x3",
            "VX_KERNEL_BOX_3x3",
            "VX_KERNEL_GAUSSIAN_3x3",
            "VX_KERNEL_CUSTOM_CONVOLUTION",
            "VX_KERNEL_GAUSSIAN_PYRAMID",
            "VX_KERNEL_ACCUMULATE",
            "VX_KERNEL_ACCUMULATE_WEIGHTED",
            "VX_KERNEL_ACCUMULATE_SQUARE",
            "VX_KERNEL_MINMAXLOC",
            "VX_KERNEL_CONVERTDEPTH",
            "VX_KERNEL_CANNY_EDGE_DETECTOR",
            "VX_KERNEL_AND",
            "VX_KERNEL_OR",
            "VX_KERNEL_XOR",
            "VX_KERNEL_NOT",
            "VX_KERNEL_MULTIPLY",
            "VX_KERNEL_ADD",
            "VX_KERNEL_SUBTRACT",
            "VX_KERNEL_WARP_AFFINE",
            "VX_KERNEL_WARP_PERSPECTIVE",
            "VX_KERNEL_HARRIS_CORNERS",
            "VX_KERNEL_FAST_CORNERS",
            "VX_KERNEL_OPTICAL_FLOW_PYR_LK",
            "VX_KERNEL_REMAP",
            "VX_KERNEL_HALFSCALE_GAUSSIAN",
            "VX_KERNEL_LAPLACIAN_PYRAMID",
            "VX_KERNEL_LAPLACIAN_RECONSTRUCT",
            "VX_KERNEL_NON_LINEAR_FILTER",
            "VX_KERNEL_MATCH_TEMPLATE",
            "VX_KERNEL_LBP",
            "VX_KERNEL_HOUGH_LINES_P",
            "VX_KERNEL_TENSOR_MULTIPLY",
            "VX_KERNEL_TENSOR_ADD",
            "VX_KERNEL_TENSOR_SUBTRACT",
            "VX_KERNEL_TENSOR_TABLELOOKUP",
            "VX_KERNEL_TENSOR_TRANSPOSE",
            "VX_KERNEL_TENSOR_CONVERT_DEPTH",
            "VX_KERNEL_TENSOR_MATRIX_MULTIPLY",
            "VX_KERNEL_COPY",
            "VX_KERNEL_NON_MAX_SUPPRESSION",
            "VX_KERNEL_SCALAR_OPERATION",
            "VX_KERNEL_HOG_FEATURES",
            "VX_KERNEL_HOG_CELLS",
            "VX_KERNEL_BILATERAL_FILTER",
            "VX_KERNEL_SELECT",
            "VX_KERNEL_MAX",
            "VX_KERNEL_MIN",
        ],
    },
    SequenceTable {
        name: "vx_kernel_nn_e",
        vendor: KHRONOS,
        secondary: "VX_LIBRARY_NN_EXTENSION",
        first: 0,
        labels: &[
            "VX_KERNEL_CONVOLUTION_LAYER",
            "VX_KERNEL_FULLY_CONNECTED_LAYER",
            "VX_KERNEL_POOLING_LAYER",
            "VX_KERNEL_SOFTMAX_LAYER",
            "VX_KERNEL_NORMALIZATION_LAYER",
            "VX_KERNEL_ACTIVATION_LAYER",
            "VX_KERNEL_ROI_POOLING_LAYER",
            "VX_KERNEL_DECONVOLUTION_LAYER",
        ],
    },
    SequenceTable {
        name: "vx_kernel_classifier_e",
        vendor: KHRONOS,
        secondary: "VX_LIBRARY_KHR_CLASSIFIER_EXTENSION",
        first: 0,
        labels: &["VX_KERNEL_SCAN_CLASSIFIER"],
    },
];

pub(crate) const STRUCTS: &[(&str, &[(&str, &str)])] = &[
    (
        "vx_border_t",
        &[("mode", "vx_border_e"), ("constant_value", "vx_pixel_value_t")],
    ),
    (
        "vx_hog_t",
        &[
            ("cell_width", "vx_int32"),
            ("cell_height", "vx_int32"),
            ("block_width", "vx_int32"),
            ("block_height", "vx_int32"),
            ("block_stride", "vx_int32"),
            ("num_bins", "vx_int32"),
            ("window_width", "vx_int32"),
            ("window_height", "vx_int32"),
            ("window_stride", "vx_int32"),
            ("threshold", "vx_float32"),
        ],
    ),
    (
        "vx_hough_lines_p_t",
        &[
            ("rho", "vx_float32"),
            ("theta", "vx_float32"),
            ("threshold", "vx_int32"),
            ("line_length", "vx_int32"),
            ("line_gap", "vx_int32"),
            ("theta_max", "vx_float32"),
            ("theta_min", "vx_float32"),
        ],
    ),
    (
        "vx_tensor_matrix_multiply_params_t",
        &[
            ("transpose_input1", "vx_bool"),
            ("transpose_input2", "vx_bool"),
            ("transpose_input3", "vx_bool"),
        ],
    ),
    (
        "vx_keypoint_t",
        &[
            ("x", "vx_int32"),
            ("y", "vx_int32"),
            ("strength", "vx_float32"),
            ("scale", "vx_float32"),
            ("orientation", "vx_float32"),
            ("tracking_status", "vx_int32"),
            ("error", "vx_float32"),
        ],
    ),
    (
        "vx_line2d_t",
        &[
            ("start_x", "vx_float32"),
            ("start_y", "vx_float32"),
            ("end_x", "vx_float32"),
            ("end_y", "vx_float32"),
        ],
    ),
    (
        "vx_rectangle_t",
        &[
            ("start_x", "vx_uint32"),
            ("start_y", "vx_uint32"),
            ("end_x", "vx_uint32"),
            ("end_y", "vx_uint32"),
        ],
    ),
    ("vx_coordinates2d_t", &[("x", "vx_uint32"), ("y", "vx_uint32")]),
    ("vx_coordinates2df_t", &[("x", "vx_float32"), ("y", "vx_float32")]),
    (
        "vx_coordinates3d_t",
        &[("x", "vx_uint32"), ("y", "vx_uint32"), ("z", "vx_uint32")],
    ),
    (
        "vx_nn_convolution_params_t",
        &[
            ("padding_x", "vx_size"),
            ("padding_y", "vx_size"),
            ("overflow_policy", "vx_convert_policy_e"),
            ("rounding_policy", "vx_round_policy_e"),
            ("down_scale_size_rounding", "vx_nn_rounding_type_e"),
            ("dilation_x", "vx_size"),
            ("dilation_y", "vx_size"),
        ],
    ),
    (
        "vx_nn_deconvolution_params_t",
        &[
            ("padding_x", "vx_size"),
            ("padding_y", "vx_size"),
            ("overflow_policy", "vx_convert_policy_e"),
            ("rounding_policy", "vx_round_policy_e"),
            ("a_x", "vx_size"),
            ("a_y", "vx_size"),
        ],
    ),
    ("vx_nn_roi_pool_params_t", &[("pool_type", "vx_nn_pooling_type_e")]),
];

pub(crate) const UNIONS: &[(&str, &[(&str, &str)])] = &[(
    "vx_pixel_value_t",
    &[
        ("RGB", "vx_uint8[3]"),
        ("RGBX", "vx_uint8[4]"),
        ("YUV", "vx_uint8[3]"),
        ("U8", "vx_uint8"),
        ("U16", "vx_uint16"),
        ("S16", "vx_int16"),
        ("U32", "vx_uint32"),
        ("S32", "vx_int32"),
        ("reserved", "vx_uint8[16]"),
    ],
)];

pub(crate) const ARRAYS: &[(&str, &str, usize)] = &[
    ("vx_uint8[3]", "vx_uint8", 3),
    ("vx_uint8[4]", "vx_uint8", 4),
    ("vx_uint8[16]", "vx_uint8", 16),
];

pub(crate) const INHERENT: &[(&str, &str)] = &[
    ("vx_size", "0"),
    ("vx_char", "."),
    ("vx_bool", "false"),
    ("vx_int8", "0"),
    ("vx_uint8", "0"),
    ("vx_int16", "0"),
    ("vx_uint16", "0"),
    ("vx_int32", "0"),
    ("vx_uint32", "0"),
    ("vx_int64", "0"),
    ("vx_uint64", "0"),
    ("vx_float16", "0.0"),
    ("vx_float32", "0.0"),
    ("vx_float64", "0.0"),
    ("vx_invalid", ""),
    ("vx_df_image", "U008"),
];

pub(crate) const OPAQUE: &[&str] = &["vx_classifier_model", "vx_size *"];

/// Fields of the `vx_reference` base type: object type -> `vx_type_e` label.
pub(crate) const REFERENCE_OBJECTS: &[(&str, &str)] = &[
    ("vx_delay", "VX_TYPE_DELAY"),
    ("vx_lut", "VX_TYPE_LUT"),
    ("vx_distribution", "VX_TYPE_DISTRIBUTION"),
    ("vx_pyramid", "VX_TYPE_PYRAMID"),
    ("vx_threshold", "VX_TYPE_THRESHOLD"),
    ("vx_matrix", "VX_TYPE_MATRIX"),
    ("vx_convolution", "VX_TYPE_CONVOLUTION"),
    ("vx_scalar", "VX_TYPE_SCALAR"),
    ("vx_array", "VX_TYPE_ARRAY"),
    ("vx_image", "VX_TYPE_IMAGE"),
    ("vx_remap", "VX_TYPE_REMAP"),
    ("vx_object_array", "VX_TYPE_OBJECT_ARRAY"),
    ("vx_tensor", "VX_TYPE_TENSOR"),
];

/// Reference objects: attribute label -> attribute type.
pub(crate) const OBJECTS: &[(&str, &[(&str, &str)])] = &[
    ("vx_delay", &[("VX_DELAY_TYPE", "vx_type_e"), ("VX_DELAY_SLOTS", "vx_size")]),
    (
        "vx_lut",
        &[
            ("VX_LUT_TYPE", "vx_type_e"),
            ("VX_LUT_COUNT", "vx_size"),
            ("VX_LUT_SIZE", "vx_size"),
            ("VX_LUT_OFFSET", "vx_uint32"),
        ],
    ),
    (
        "vx_distribution",
        &[
            ("VX_DISTRIBUTION_DIMENSIONS", "vx_size"),
            ("VX_DISTRIBUTION_OFFSET", "vx_int32"),
            ("VX_DISTRIBUTION_RANGE", "vx_uint32"),
            ("VX_DISTRIBUTION_BINS", "vx_size"),
            ("VX_DISTRIBUTION_WINDOW", "vx_uint32"),
            ("VX_DISTRIBUTION_SIZE", "vx_size"),
        ],
    ),
    (
        "vx_pyramid",
        &[
            ("VX_PYRAMID_LEVELS", "vx_size"),
            ("VX_PYRAMID_SCALE", "vx_float32"),
            ("VX_PYRAMID_WIDTH", "vx_uint32"),
            ("VX_PYRAMID_HEIGHT", "vx_uint32"),
            ("VX_PYRAMID_FORMAT", "vx_df_image"),
        ],
    ),
    (
        "vx_threshold",
        &[
            ("VX_THRESHOLD_TYPE", "vx_threshold_type_e"),
            ("VX_THRESHOLD_INPUT_FORMAT", "vx_df_image_e"),
            ("VX_THRESHOLD_OUTPUT_FORMAT", "vx_df_image_e"),
        ],
    ),
    (
        "vx_matrix",
        &[
            ("VX_MATRIX_TYPE", "vx_type_e"),
            ("VX_MATRIX_ROWS", "vx_size"),
            ("VX_MATRIX_COLUMNS", "vx_size"),
            ("VX_MATRIX_SIZE", "vx_size"),
            ("VX_MATRIX_ORIGIN", "vx_coordinates2d_t"),
            ("VX_MATRIX_PATTERN", "vx_pattern_e"),
        ],
    ),
    (
        "vx_convolution",
        &[
            ("VX_CONVOLUTION_ROWS", "vx_size"),
            ("VX_CONVOLUTION_COLUMNS", "vx_size"),
            ("VX_CONVOLUTION_SCALE", "vx_uint32"),
            ("VX_CONVOLUTION_SIZE", "vx_size"),
        ],
    ),
    ("vx_scalar", &[("VX_SCALAR_TYPE", "vx_type_e")]),
    (
        "vx_array",
        &[
            ("VX_ARRAY_ITEMTYPE", "vx_type_e"),
            ("VX_ARRAY_NUMITEMS", "vx_size"),
            ("VX_ARRAY_CAPACITY", "vx_size"),
            ("VX_ARRAY_ITEMSIZE", "vx_size"),
        ],
    ),
    (
        "vx_image",
        &[
            ("VX_IMAGE_WIDTH", "vx_uint32"),
            ("VX_IMAGE_HEIGHT", "vx_uint32"),
            ("VX_IMAGE_FORMAT", "vx_df_image"),
            ("VX_IMAGE_PLANES", "vx_size"),
            ("VX_IMAGE_SPACE", "vx_color_space_e"),
            ("VX_IMAGE_RANGE", "vx_channel_range_e"),
            ("VX_IMAGE_MEMORY_TYPE", "vx_memory_type_e"),
            ("VX_IMAGE_IS_UNIFORM", "vx_bool"),
            ("VX_IMAGE_UNIFORM_VALUE", "vx_pixel_value_t"),
        ],
    ),
    (
        "vx_remap",
        &[
            ("VX_REMAP_SOURCE_WIDTH", "vx_uint32"),
            ("VX_REMAP_SOURCE_HEIGHT", "vx_uint32"),
            ("VX_REMAP_DESTINATION_WIDTH", "vx_uint32"),
            ("VX_REMAP_DESTINATION_HEIGHT", "vx_uint32"),
        ],
    ),
    (
        "vx_object_array",
        &[
            ("VX_OBJECT_ARRAY_ITEMTYPE", "vx_type_e"),
            ("VX_OBJECT_ARRAY_NUMITEMS", "vx_size"),
        ],
    ),
    (
        "vx_tensor",
        &[
            ("VX_TENSOR_NUMBER_OF_DIMS", "vx_size"),
            ("VX_TENSOR_DIMS", "vx_size *"),
            ("VX_TENSOR_DATA_TYPE", "vx_type_e"),
            ("VX_TENSOR_FIXED_POINT_POSITION", "vx_int8"),
        ],
    ),
];

/// `VX_TYPE_*` label -> type name. Reversed for the type -> label direction.
pub(crate) const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("VX_TYPE_INVALID", "vx_invalid"),
    ("VX_TYPE_CHAR", "vx_char"),
    ("VX_TYPE_INT8", "vx_int8"),
    ("VX_TYPE_UINT8", "vx_uint8"),
    ("VX_TYPE_INT16", "vx_int16"),
    ("VX_TYPE_UINT16", "vx_uint16"),
    ("VX_TYPE_INT32", "vx_int32"),
    ("VX_TYPE_UINT32", "vx_uint32"),
    ("VX_TYPE_INT64", "vx_int64"),
    ("VX_TYPE_UINT64", "vx_uint64"),
    ("VX_TYPE_FLOAT16", "vx_float16"),
    ("VX_TYPE_FLOAT32", "vx_float32"),
    ("VX_TYPE_FLOAT64", "vx_float64"),
    ("VX_TYPE_ENUM", "vx_enum"),
    ("VX_TYPE_SIZE", "vx_size"),
    ("VX_TYPE_DF_IMAGE", "vx_df_image"),
    ("VX_TYPE_BOOL", "vx_bool"),
    ("VX_TYPE_RECTANGLE", "vx_rectangle_t"),
    ("VX_TYPE_KEYPOINT", "vx_keypoint_t"),
    ("VX_TYPE_COORDINATES2D", "vx_coordinates2d_t"),
    ("VX_TYPE_COORDINATES3D", "vx_coordinates3d_t"),
    ("VX_TYPE_COORDINATES2DF", "vx_coordinates2df_t"),
    ("VX_TYPE_NN_CONVOLUTION_PARAMS", "vx_nn_convolution_params_t"),
    ("VX_TYPE_NN_DECONVOLUTION_PARAMS", "vx_nn_deconvolution_params_t"),
    ("VX_TYPE_NN_ROI_POOL_PARAMS", "vx_nn_roi_pool_params_t"),
    ("VX_TYPE_HOG_PARAMS", "vx_hog_t"),
    ("VX_TYPE_HOUGH_LINES_PARAMS", "vx_hough_lines_p_t"),
    ("VX_TYPE_LINE_2D", "vx_line2d_t"),
    ("VX_TYPE_TENSOR_MATRIX_MULTIPLY_PARAMS", "vx_tensor_matrix_multiply_params_t"),
    ("VX_TYPE_CLASSIFIER_MODEL", "vx_classifier_model"),
    ("VX_TYPE_REFERENCE", "vx_reference"),
    ("VX_TYPE_CONTEXT", "vx_context"),
    ("VX_TYPE_GRAPH", "vx_graph"),
    ("VX_TYPE_NODE", "vx_node"),
    ("VX_TYPE_KERNEL", "vx_kernel"),
    ("VX_TYPE_PARAMETER", "vx_parameter"),
    ("VX_TYPE_DELAY", "vx_delay"),
    ("VX_TYPE_LUT", "vx_lut"),
    ("VX_TYPE_DISTRIBUTION", "vx_distribution"),
    ("VX_TYPE_PYRAMID", "vx_pyramid"),
    ("VX_TYPE_THRESHOLD", "vx_threshold"),
    ("VX_TYPE_MATRIX", "vx_matrix"),
    ("VX_TYPE_CONVOLUTION", "vx_convolution"),
    ("VX_TYPE_SCALAR", "vx_scalar"),
    ("VX_TYPE_ARRAY", "vx_array"),
    ("VX_TYPE_IMAGE", "vx_image"),
    ("VX_TYPE_REMAP", "vx_remap"),
    ("VX_TYPE_OBJECT_ARRAY", "vx_object_array"),
    ("VX_TYPE_TENSOR", "vx_tensor"),
];
