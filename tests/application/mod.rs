mod transcribe_then_classify_test;
