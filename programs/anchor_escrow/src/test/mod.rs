pub mod svm;
