mod test_moves;
