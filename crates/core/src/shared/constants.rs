/// Network topology graph, fixed name inside the model directory.
pub const MODEL_TOPOLOGY_FILE: &str = "deploy.onnx";

/// Trained weights, stored as ONNX external data next to the topology graph.
pub const MODEL_WEIGHTS_FILE: &str = "res10_300x300_ssd_iter_140000_fp16.onnx.data";

/// Side length of the square network input.
pub const SSD_INPUT_SIZE: usize = 300;

/// Per-channel mean subtracted from the resized frame, in BGR order.
pub const SSD_MEAN_BGR: [f32; 3] = [104.0, 177.0, 123.0];

/// Floats per candidate row: image id, class id, confidence, x1, y1, x2, y2.
pub const SSD_ROW_LEN: usize = 7;

pub const BOX_COLOR_BGR: [u8; 3] = [0, 255, 0];
pub const BOX_THICKNESS: u32 = 3;

/// Channels in every annotated output frame.
pub const OUTPUT_CHANNELS: usize = 3;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
