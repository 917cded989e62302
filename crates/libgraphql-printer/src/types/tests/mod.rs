mod deprecation_reason_tests;
mod type_annotation_tests;
