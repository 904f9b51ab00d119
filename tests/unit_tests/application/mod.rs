mod normalize_test;
