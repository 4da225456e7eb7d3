pub mod detector_registry;
pub mod execution_provider;
pub mod model_files;
pub mod ort_ssd_network;
pub mod resnet10_ssd_face_detector;
