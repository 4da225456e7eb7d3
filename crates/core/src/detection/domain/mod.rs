pub mod detection;
pub mod detector_config;
pub mod model_dnn_detector;
pub mod ssd_network;
