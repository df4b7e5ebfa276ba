mod augment;
