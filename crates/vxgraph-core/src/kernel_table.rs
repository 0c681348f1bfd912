//! Standard kernel signatures.
//!
//! Requirement and match strings are kept verbatim; they are not evaluated.

use crate::kernels::Direction::{self, *};
use crate::kernels::ParamState::{self, *};

pub(crate) struct ParamSpec {
    pub name: &'static str,
    pub direction: Direction,
    pub state: ParamState,
    pub type_name: &'static str,
    pub requirement: &'static str,
}

pub(crate) struct KernelSpec {
    pub name: &'static str,
    pub function: &'static str,
    pub label: &'static str,
    pub params: &'static [ParamSpec],
    pub matches: &'static str,
}

const fn param(
    name: &'static str,
    direction: Direction,
    state: ParamState,
    type_name: &'static str,
    requirement: &'static str,
) -> ParamSpec {
    ParamSpec {
        name,
        direction,
        state,
        type_name,
        requirement,
    }
}

pub(crate) const KERNELS: &[KernelSpec] = &[
    KernelSpec {
        name: "org.khronos.openvx.color_convert",
        function: "vxColorConvertNode",
        label: "VX_KERNEL_COLOR_CONVERT",
        params: &[
            param("input", Input, Required, "vx_image", ""),
            param("output", Output, Required, "vx_image", ""),
        ],
        matches: "output.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and output.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.channel_extract",
        function: "vxChannelExtractNode",
        label: "VX_KERNEL_CHANNEL_EXTRACT",
        params: &[
            param("input", Input, Required, "vx_image", ""),
            param("channel", Input, Immutable, "vx_channel_e", ""),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and output.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.channel_combine",
        function: "vxChannelCombineNode",
        label: "VX_KERNEL_CHANNEL_COMBINE",
        params: &[
            param("plane0", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("plane1", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("plane2", Input, Optional, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("plane3", Input, Optional, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", ""),
        ],
        matches: "output.VX_IMAGE_WIDTH is plane0.VX_IMAGE_WIDTH and output.VX_IMAGE_HEIGHT is plane0.VX_IMAGE_HEIGHT and plane0 is plane1 and plane1 is plane2 and plane2 is plane3",
    },
    KernelSpec {
        name: "org.khronos.openvx.sobel_3x3",
        function: "vxSobel3x3Node",
        label: "VX_KERNEL_SOBEL_3x3",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output_x", Output, Optional, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
            param("output_y", Output, Optional, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
        ],
        matches: "output_x is output_y and output_x.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and output_x.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.magnitude",
        function: "vxMagnitudeNode",
        label: "VX_KERNEL_MAGNITUDE",
        params: &[
            param("grad_x", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
            param("grad_y", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
            param("mag", Output, Required, "vx_image", "mag.VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
        ],
        matches: "mag is grad_x and mag is grad_y",
    },
    KernelSpec {
        name: "org.khronos.openvx.phase",
        function: "vxPhaseNode",
        label: "VX_KERNEL_PHASE",
        params: &[
            param("grad_x", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
            param("grad_y", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
            param("orientation", Output, Required, "vx_image", "orientation.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "orientation.VX_IMAGE_WIDTH is grad_x.VX_IMAGE_WIDTH and orientation.VX_IMAGE_HEIGHT is grad_x.VX_IMAGE_HEIGHT and grad_x is grad_y",
    },
    KernelSpec {
        name: "org.khronos.openvx.scale_image",
        function: "vxScaleImageNode",
        label: "VX_KERNEL_SCALE_IMAGE",
        params: &[
            param("src", Input, Required, "vx_image", ""),
            param("dst", Output, Required, "vx_image", ""),
            param("type", Input, Immutable, "vx_interpolation_type_e", ""),
        ],
        matches: "dst.VX_IMAGE_FORMAT is src.VX_IMAGE_FORMAT",
    },
    KernelSpec {
        name: "org.khronos.openvx.table_lookup",
        function: "vxTableLookupNode",
        label: "VX_KERNEL_TABLE_LOOKUP",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_S16, VX_DF_IMAGE_U8]"),
            param("lut", Input, Required, "vx_lut", "VX_LUT_TYPE in [VX_TYPE_UINT8, VX_TYPE_INT16]"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_S16, VX_DF_IMAGE_U8]"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.histogram",
        function: "vxHistogramNode",
        label: "VX_KERNEL_HISTOGRAM",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("distribution", Output, Required, "vx_distribution", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.equalize_histogram",
        function: "vxEqualizeHistNode",
        label: "VX_KERNEL_EQUALIZE_HISTOGRAM",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.absdiff",
        function: "vxAbsDiffNode",
        label: "VX_KERNEL_ABSDIFF",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_S16, VX_DF_IMAGE_U8]"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_S16, VX_DF_IMAGE_U8]"),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_S16, VX_DF_IMAGE_U8]"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.mean_stddev",
        function: "vxMeanStdDevNode",
        label: "VX_KERNEL_MEAN_STDDEV",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("mean", Output, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("stddev", Output, Optional, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.threshold",
        function: "vxThresholdNode",
        label: "VX_KERNEL_THRESHOLD",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_S16, VX_DF_IMAGE_U8]"),
            param("thresh", Input, Required, "vx_threshold", ""),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.integral_image",
        function: "vxIntegralImageNode",
        label: "VX_KERNEL_INTEGRAL_IMAGE",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U32"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.dilate_3x3",
        function: "vxDilate3x3Node",
        label: "VX_KERNEL_DILATE_3x3",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.erode_3x3",
        function: "vxErode3x3Node",
        label: "VX_KERNEL_ERODE_3x3",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.median_3x3",
        function: "vxMedian3x3Node",
        label: "VX_KERNEL_MEDIAN_3x3",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.box_3x3",
        function: "vxBox3x3Node",
        label: "VX_KERNEL_BOX_3x3",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.gaussian_3x3",
        function: "vxGaussian3x3Node",
        label: "VX_KERNEL_GAUSSIAN_3x3",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.custom_convolution",
        function: "vxConvolveNode",
        label: "VX_KERNEL_CUSTOM_CONVOLUTION",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("conv", Input, Required, "vx_convolution", ""),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "output.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and output.VX_IMAGE_HEIGHT is input.vx_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.gaussian_pyramid",
        function: "vxGaussianPyramidNode",
        label: "VX_KERNEL_GAUSSIAN_PYRAMID",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("gaussian", Output, Required, "vx_pyramid", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.accumulate",
        function: "vxAccumulateImageNode",
        label: "VX_KERNEL_ACCUMULATE",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("accum", Bidirectional, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
        ],
        matches: "accum.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and accum.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.accumulate_weighted",
        function: "vxAccumulateWeightedImageNode",
        label: "VX_KERNEL_ACCUMULATE_WEIGHTED",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("alpha", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32 and 0.0 <=  $value <= 1.0"),
            param("accum", Bidirectional, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "accum.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and accum.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.accumulate_square",
        function: "vxAccumulateSquareImageNode",
        label: "VX_KERNEL_ACCUMULATE_SQUARE",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("shift", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_UINT32 and 0 <=  $value <= 15"),
            param("accum", Bidirectional, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
        ],
        matches: "accum.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and accum.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.minmaxloc",
        function: "vxMinMaxLocNode",
        label: "VX_KERNEL_MINMAXLOC",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("minVal", Output, Required, "vx_scalar", "VX_SCALAR_TYPE in [VX_TYPE_UINT8, VX_TYPE_INT16]"),
            param("maxVal", Output, Required, "vx_scalar", "VX_SCALAR_TYPE in [VX_TYPE_UINT8, VX_TYPE_INT16]"),
            param("minloc", Output, Optional, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_COORDINATES2D"),
            param("maxloc", Output, Optional, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_COORDINATES2D"),
            param("minCount", Output, Optional, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_SIZE"),
            param("maxCount", Output, Optional, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_SIZE"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.convertdepth",
        function: "vxConvertDepthNode",
        label: "VX_KERNEL_CONVERTDEPTH",
        params: &[
            param("input", Input, Required, "vx_image", ""),
            param("output", Output, Required, "vx_image", ""),
            param("policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("shift", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_INT32"),
        ],
        matches: "output.VX_IMAGE_WIDTH is input.VX_IMAGE_WIDTH and output.VX_IMAGE_HEIGHT is input.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.canny_edge_detector",
        function: "vxCannyEdgeDetectorNode",
        label: "VX_KERNEL_CANNY_EDGE_DETECTOR",
        params: &[
            param("input", Input, Required, "vx_image", ""),
            param("hyst", Input, Required, "vx_threshold", ""),
            param("gradient_size", Input, Immutable, "vx_uint32", ""),
            param("norm_type", Input, Immutable, "vx_norm_type_e", ""),
            param("output", Output, Required, "vx_image", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.and",
        function: "vxAndNode",
        label: "VX_KERNEL_AND",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "out is in1 and out is in2",
    },
    KernelSpec {
        name: "org.khronos.openvx.or",
        function: "vxOrNode",
        label: "VX_KERNEL_OR",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "out is in1 and out is in2",
    },
    KernelSpec {
        name: "org.khronos.openvx.xor",
        function: "vxXorNode",
        label: "VX_KERNEL_XOR",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "out is in1 and out is in2",
    },
    KernelSpec {
        name: "org.khronos.openvx.not",
        function: "vxNotNode",
        label: "VX_KERNEL_NOT",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.multiply",
        function: "vxMultiplyNode",
        label: "VX_KERNEL_MULTIPLY",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("scale", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("overflow_policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("rounding_policy", Input, Immutable, "vx_round_policy_e", ""),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "(out.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 and in1.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 and in2.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 or out.VX_IMAGE_FORMAT is VX_DF_IMAGE_S16) and out.VX_IMAGE_WIDTH is in1.VX_IMAGE_WIDTH and out.VX_IMAGE_HEIGHT is in1.VX_IMAGE_HEIGHT and out.VX_IMAGE_WIDTH is in2.VX_IMAGE_WIDTH and out.VX_IMAGE_HEIGHT is in2.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.add",
        function: "vxAddNode",
        label: "VX_KERNEL_ADD",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "(out.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 and in1.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 and in2.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 or out.VX_IMAGE_FORMAT is VX_DF_IMAGE_S16) and out.VX_IMAGE_WIDTH is in1.VX_IMAGE_WIDTH and out.VX_IMAGE_HEIGHT is in1.VX_IMAGE_HEIGHT and out.VX_IMAGE_WIDTH is in2.VX_IMAGE_WIDTH and out.VX_IMAGE_HEIGHT is in2.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.subtract",
        function: "vxSubtractNode",
        label: "VX_KERNEL_SUBTRACT",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "(out.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 and in1.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 and in2.VX_IMAGE_FORMAT is VX_DF_IMAGE_U8 or out.VX_IMAGE_FORMAT is VX_DF_IMAGE_S16) and out.VX_IMAGE_WIDTH is in1.VX_IMAGE_WIDTH and out.VX_IMAGE_HEIGHT is in1.VX_IMAGE_HEIGHT and out.VX_IMAGE_WIDTH is in2.VX_IMAGE_WIDTH and out.VX_IMAGE_HEIGHT is in2.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.warp_affine",
        function: "vxWarpAffineNode",
        label: "VX_KERNEL_WARP_AFFINE",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("matrix", Input, Required, "vx_matrix", "VX_MATRIX_COLUMNS is 2 and VX_MATRIX_ROWS is 3 and VX_MATRIX_TYPE is VX_TYPE_FLOAT32"),
            param("type", Input, Immutable, "vx_interpolation_type_e", " $value  is not VX_INTERPOLATION_AREA"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.warp_perspective",
        function: "vxWarpPerspectiveNode",
        label: "VX_KERNEL_WARP_PERSPECTIVE",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("matrix", Input, Required, "vx_matrix", "VX_MATRIX_COLUMNS is 3 and VX_MATRIX_ROWS is 3 and VX_MATRIX_TYPE is VX_TYPE_FLOAT32"),
            param("type", Input, Immutable, "vx_interpolation_type_e", " $value ! is  VX_INTERPOLATION_AREA"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.harris_corners",
        function: "vxHarrisCornersNode",
        label: "VX_KERNEL_HARRIS_CORNERS",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("strength_thresh", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("min_distance", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("sensitivity", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("gradient_size", Input, Immutable, "vx_int32", ""),
            param("block_size", Input, Immutable, "vx_int32", ""),
            param("corners", Output, Required, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_KEYPOINT"),
            param("num_corners", Output, Optional, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_SIZE"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.fast_corners",
        function: "vxFastCornersNode",
        label: "VX_KERNEL_FAST_CORNERS",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("strength_thresh", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("nonmax_suppression", Input, Immutable, "vx_bool", ""),
            param("corners", Output, Required, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_KEYPOINT"),
            param("num_corners", Output, Optional, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_SIZE"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.optical_flow_pyr_lk",
        function: "vxOpticalFlowPyrLKNode",
        label: "VX_KERNEL_OPTICAL_FLOW_PYR_LK",
        params: &[
            param("old_images", Input, Required, "vx_pyramid", "VX_PYRAMID_FORMAT is VX_DF_IMAGE_U8"),
            param("new_images", Input, Required, "vx_pyramid", "VX_PYRAMID_FORMAT is VX_DF_IMAGE_U8"),
            param("old_points", Input, Required, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_KEYPOINT"),
            param("new_points_estimates", Input, Required, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_KEYPOINT"),
            param("new_points", Output, Required, "vx_array", "VX_ARRAY_ITEM_TYPE is VX_TYPE_KEYPOINT"),
            param("termination", Input, Immutable, "vx_termination_criteria_e", ""),
            param("epsilon", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("num_iterations", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_UINT32"),
            param("use_initial_estimate", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_BOOL"),
            param("window_dimension", Input, Immutable, "vx_size", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.remap",
        function: "vxRemapNode",
        label: "VX_KERNEL_REMAP",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("table", Input, Required, "vx_remap", ""),
            param("policy", Input, Immutable, "vx_interpolation_type_e", " $value  is not VX_INTERPOLATION_TYPE_AREA"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.halfscale_gaussian",
        function: "vxHalfScaleGaussianNode",
        label: "VX_KERNEL_HALFSCALE_GAUSSIAN",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("kernel_size", Input, Immutable, "vx_int32", " $value > 0"),
        ],
        matches: "output.VX_IMAGE_WIDTH is (input.VX_IMAGE_WIDTH + 1)/2 and output.VX_IMAGE_HEIGHT is (input.VX_IMAGE_HEIGHT + 1)/2",
    },
    KernelSpec {
        name: "org.khronos.openvx.laplacian_pyramid",
        function: "vxLaplacianPyramidNode",
        label: "VX_KERNEL_LAPLACIAN_PYRAMID",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("laplacian", Output, Required, "vx_pyramid", "VX_PYRAMID_FORMAT is VX_DF_IMAGE_S16"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.laplacian_reconstruct",
        function: "vxLaplacianReconstructNode",
        label: "VX_KERNEL_LAPLACIAN_RECONSTRUCT",
        params: &[
            param("laplacian", Input, Required, "vx_pyramid", "VX_PYRAMID_FORMAT is VX_DF_IMAGE_S16"),
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.non_linear_filter",
        function: "vxNonLinearFilterNode",
        label: "VX_KERNEL_NON_LINEAR_FILTER",
        params: &[
            param("function", Input, Immutable, "vx_non_linear_filter_e", ""),
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("mask", Input, Required, "vx_matrix", ""),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.match_template",
        function: "vxMatchTemplateNode",
        label: "VX_KERNEL_MATCH_TEMPLATE",
        params: &[
            param("src", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("templateImage", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("matchingMethod", Input, Immutable, "vx_comp_metric_e", ""),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_S16"),
        ],
        matches: "output.VX_IMAGE_WIDTH is src.VX_IMAGE_WIDTH and output.VX_IMAGE_HEIGHT is src.VX_IMAGE_HEIGHT and src.VX_IMAGE_WIDTH is templateImage.VX_IMAGE_WIDTH and src.VX_IMAGE_HEIGHT is templateImage.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.lbp",
        function: "vxLBPNode",
        label: "VX_KERNEL_LBP",
        params: &[
            param("in", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("format", Input, Immutable, "vx_lbp_format_e", ""),
            param("kernel_size", Input, Immutable, "vx_int8", ""),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.hough_lines_p",
        function: "vxHoughLinesPNode",
        label: "VX_KERNEL_HOUGH_LINES_P",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("params", Input, Immutable, "vx_hough_lines_p_t", ""),
            param("lines_array", Output, Required, "vx_array", "VX_ARRAY_ELEM_TYPE is VX_TYPE_LINE_2D"),
            param("num_lines", Output, Optional, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_SIZE"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.tensor_multiply",
        function: "vxTensorMultiplyNode",
        label: "VX_KERNEL_TENSOR_MULTIPLY",
        params: &[
            param("input1", Input, Required, "vx_tensor", ""),
            param("input2", Input, Required, "vx_tensor", ""),
            param("scale", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("overflow_policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("rounding_policy", Input, Immutable, "vx_round_policy_e", ""),
            param("output", Output, Required, "vx_tensor", ""),
        ],
        matches: "output is input1",
    },
    KernelSpec {
        name: "org.khronos.openvx.tensor_add",
        function: "vxTensorAddNode",
        label: "VX_KERNEL_TENSOR_ADD",
        params: &[
            param("input1", Input, Required, "vx_tensor", ""),
            param("input2", Input, Required, "vx_tensor", ""),
            param("policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("output", Output, Required, "vx_tensor", ""),
        ],
        matches: "output is input1",
    },
    KernelSpec {
        name: "org.khronos.openvx.tensor_subtract",
        function: "vxTensorSubtractNode",
        label: "VX_KERNEL_TENSOR_SUBTRACT",
        params: &[
            param("input1", Input, Required, "vx_tensor", ""),
            param("input2", Input, Required, "vx_tensor", ""),
            param("policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("output", Output, Required, "vx_tensor", ""),
        ],
        matches: "output is input1",
    },
    KernelSpec {
        name: "org.khronos.openvx.tensor_table_lookup",
        function: "vxTensorTableLookupNode",
        label: "VX_KERNEL_TENSOR_TABLELOOKUP",
        params: &[
            param("input1", Input, Required, "vx_tensor", ""),
            param("lut", Input, Required, "vx_lut", ""),
            param("output", Output, Required, "vx_tensor", ""),
        ],
        matches: "lut.VX_LUT_TYPE is output.VX_TENSOR_DATA_TYPE and output is input1",
    },
    KernelSpec {
        name: "org.khronos.openvx.tensor_transpose",
        function: "vxTensorTransposeNode",
        label: "VX_KERNEL_TENSOR_TRANSPOSE",
        params: &[
            param("input", Input, Required, "vx_tensor", ""),
            param("output", Output, Required, "vx_tensor", ""),
            param("dimension1", Input, Immutable, "vx_size", ""),
            param("dimension2", Input, Immutable, "vx_size", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.tensor_convert_depth",
        function: "vxTensorConvertDepthNode",
        label: "VX_KERNEL_TENSOR_CONVERT_DEPTH",
        params: &[
            param("input", Input, Required, "vx_tensor", ""),
            param("policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("norm", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("offset", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_FLOAT32"),
            param("output", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.matrix_multiply",
        function: "vxTensorMatrixMultiplyNode",
        label: "VX_KERNEL_TENSOR_MATRIX_MULTIPLY",
        params: &[
            param("input1", Input, Required, "vx_tensor", ""),
            param("input2", Input, Required, "vx_tensor", ""),
            param("input3", Input, Optional, "vx_tensor", ""),
            param("matrix_multiply_params", Input, Immutable, "vx_tensor_matrix_multiply_params_t", ""),
            param("output", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.copy",
        function: "vxCopyNode",
        label: "VX_KERNEL_COPY",
        params: &[
            param("input", Input, Required, "vx_reference", ""),
            param("output", Output, Required, "vx_reference", ""),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.non_max_suppression",
        function: "vxNonMaxSuppressionNode",
        label: "VX_KERNEL_NON_MAX_SUPPRESSION",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
            param("mask", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("win_size", Input, Immutable, "vx_int32", "$odd($value)"),
            param("output", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGE_S16]"),
        ],
        matches: "output is input and input.VX_IMAGE_WIDTH is mask.VX_IMAGE_WIDTH and input.VX_IMAGE_HEIGHT is mask.VX_IMAGE_HEIGHT",
    },
    KernelSpec {
        name: "org.khronos.openvx.scalar_operation",
        function: "vxScalarOperationNode",
        label: "VX_KERNEL_SCALAR_OPERATION",
        params: &[
            param("scalar_operation", Input, Immutable, "vx_scalar_operation_e", ""),
            param("a", Input, Required, "vx_scalar", ""),
            param("b", Input, Required, "vx_scalar", ""),
            param("output", Output, Required, "vx_scalar", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.hog_features",
        function: "vxHOGFeaturesNode",
        label: "VX_KERNEL_HOG_FEATURES",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("magnitudes", Input, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE is VX_TYPE_FLOAT32"),
            param("bins", Input, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE is VX_TYPE_INT8"),
            param("params", Input, Immutable, "vx_hog_t", ""),
            param("features", Output, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE is VX_TYPE_FLOAT32"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.hog_cells",
        function: "vxHOGCellsNode",
        label: "VX_KERNEL_HOG_CELLS",
        params: &[
            param("input", Input, Required, "vx_image", "VX_IMAGE_FORMAT is VX_DF_IMAGE_U8"),
            param("cell_width", Input, Immutable, "vx_int32", ""),
            param("cell_height", Input, Immutable, "vx_int32", ""),
            param("num_bins", Input, Immutable, "vx_int32", ""),
            param("magnitudes", Output, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE is VX_TYPE_FLOAT32"),
            param("bins", Output, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE is VX_TYPE_INT8"),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.openvx.bilateral_filter",
        function: "vxBilateralFilterNode",
        label: "VX_KERNEL_BILATERAL_FILTER",
        params: &[
            param("src", Input, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE in [VX_TYPE_UINT8, VX_TYPE_INT16] and VX_TENSOR_NUMBER_OF_DIMS in [2,3]"),
            param("diameter", Input, Immutable, "vx_int32", "$odd($value) and 3 < $value < 10"),
            param("sigmaSpace", Input, Immutable, "vx_float32", "0 < $value <= 20"),
            param("sigmaValues", Input, Immutable, "vx_float32", "0 < $value <= 20"),
            param("dst", Output, Required, "vx_tensor", "VX_TENSOR_DATA_TYPE in [VX_TYPE_UINT8, VX_TYPE_INT16] and VX_TENSOR_NUMBER_OF_DIMS in [2,3]"),
        ],
        matches: "output is input",
    },
    KernelSpec {
        name: "org.khronos.openvx.select",
        function: "vxSelectNode",
        label: "VX_KERNEL_SELECT",
        params: &[
            param("condition", Input, Required, "vx_scalar", "VX_SCALAR_TYPE is VX_TYPE_BOOL"),
            param("true_value", Input, Required, "vx_reference", ""),
            param("false_value", Input, Required, "vx_reference", ""),
            param("output", Output, Required, "vx_reference", ""),
        ],
        matches: "output is true_value and output is false_value",
    },
    KernelSpec {
        name: "org.khronos.openvx.min",
        function: "vxMinNode",
        label: "VX_KERNEL_MIN",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGES16]"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGES16]"),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGES16]"),
        ],
        matches: "out is in1 and in2 is in1",
    },
    KernelSpec {
        name: "org.khronos.openvx.max",
        function: "vxMaxNode",
        label: "VX_KERNEL_MAX",
        params: &[
            param("in1", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGES16]"),
            param("in2", Input, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGES16]"),
            param("out", Output, Required, "vx_image", "VX_IMAGE_FORMAT in [VX_DF_IMAGE_U8, VX_DF_IMAGES16]"),
        ],
        matches: "out is in1 and in2 is in1",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.convolution_layer",
        function: "vxConvolutionLayer",
        label: "VX_KERNEL_CONVOLUTION_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("weights", Input, Required, "vx_tensor", ""),
            param("biases", Input, Required, "vx_tensor", ""),
            param("convolution_params", Input, Immutable, "vx_nn_convolution_params_t", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.fully_connected_layer",
        function: "vxFullyConnectedLayer",
        label: "VX_KERNEL_FULLY_CONNECTED_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("weights", Input, Required, "vx_tensor", ""),
            param("biases", Input, Required, "vx_tensor", ""),
            param("overflow_policy", Input, Immutable, "vx_convert_policy_e", ""),
            param("rounding_policy", Input, Immutable, "vx_round_policy_e", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.pooling_layer",
        function: "vxPoolingLayer",
        label: "VX_KERNEL_POOLING_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("pooling_type", Input, Immutable, "vx_nn_pooling_type_e", ""),
            param("pooling_size_x", Input, Immutable, "vx_size", ""),
            param("pooling_size_y", Input, Immutable, "vx_size", ""),
            param("pooling_padding_x", Input, Immutable, "vx_size", ""),
            param("pooling_padding_y", Input, Immutable, "vx_size", ""),
            param("rounding", Input, Immutable, "vx_nn_rounding_type_e", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.softmax_layer",
        function: "vxSoftmaxLayer",
        label: "VX_KERNEL_SOFTMAX_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.normalization_layer",
        function: "vxNormalizationLayer",
        label: "VX_KERNEL_NORMALIZATION_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("type", Input, Immutable, "vx_nn_norm_type_e", ""),
            param("normalization_size", Input, Immutable, "vx_size", ""),
            param("alpha", Input, Immutable, "vx_float32", ""),
            param("beta", Input, Immutable, "vx_float32", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.activation_layer",
        function: "vxActivationLayer",
        label: "VX_KERNEL_ACTIVATION_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("function", Input, Immutable, "vx_nn_activation_function_e", ""),
            param("a", Input, Immutable, "vx_float32", ""),
            param("b", Input, Immutable, "vx_float32", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.roi_pooling_layer",
        function: "vxROIPoolingLayer",
        label: "VX_KERNEL_ROI_POOLING_LAYER",
        params: &[
            param("input_data", Input, Required, "vx_tensor", ""),
            param("input_rois", Input, Required, "vx_tensor", ""),
            param("roi_pool_params", Input, Immutable, "vx_nn_roi_pool_params_t", ""),
            param("output_arr", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.nn_extension.deconvolution_layer",
        function: "vxDeconvolutionLayer",
        label: "VX_KERNEL_DECONVOLUTION_LAYER",
        params: &[
            param("inputs", Input, Required, "vx_tensor", ""),
            param("weights", Input, Required, "vx_tensor", ""),
            param("biases", Input, Required, "vx_tensor", ""),
            param("deconvolution_params", Input, Immutable, "vx_nn_deconvolution_params_t", ""),
            param("outputs", Output, Required, "vx_tensor", ""),
        ],
        matches: "",
    },
    KernelSpec {
        name: "org.khronos.classifier_extension.scan_classifier",
        function: "vxScanClassifierNode",
        label: "VX_KERNEL_SCAN_CLASSIFIER",
        params: &[
            param("input_feature_map", Input, Required, "vx_tensor", ""),
            param("model", Input, Immutable, "vx_classifier_model", ""),
            param("scanwindow_width", Input, Immutable, "vx_int32", ""),
            param("scanwindow_height", Input, Immutable, "vx_int32", ""),
            param("step_x", Input, Immutable, "vx_int32", ""),
            param("step_y", Input, Immutable, "vx_int32", ""),
            param("object_confidences", Output, Optional, "vx_array", ""),
            param("object_rectangles", Output, Required, "vx_array", ""),
            param("num_objects", Output, Optional, "vx_array", ""),
        ],
        matches: "",
    },
];
