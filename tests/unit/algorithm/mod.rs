mod frontier;
