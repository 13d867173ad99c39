pub mod indexed_priority_queue;
pub mod vertex_distance_queue;
