use crate::models::NutritionFact;

/// Built-in catalog rows, per 100g, in display order.
pub(super) const FOODS: &[(&str, NutritionFact)] = &[
    // Staples
    ("chicken breast", NutritionFact::new(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("rice", NutritionFact::new(130.0, 2.7, 28.0, 0.3, 0.1)),
    ("banana", NutritionFact::new(89.0, 1.1, 23.0, 0.3, 12.0)),
    ("egg", NutritionFact::new(155.0, 13.0, 1.1, 11.0, 1.1)),
    ("oatmeal", NutritionFact::new(68.0, 2.4, 12.0, 1.4, 0.4)),
    ("salmon", NutritionFact::new(208.0, 25.0, 0.0, 12.0, 0.0)),
    ("broccoli", NutritionFact::new(34.0, 2.8, 7.0, 0.4, 1.5)),
    ("apple", NutritionFact::new(52.0, 0.3, 14.0, 0.2, 10.0)),
    ("bread", NutritionFact::new(265.0, 9.0, 49.0, 3.2, 5.0)),
    ("milk", NutritionFact::new(42.0, 3.4, 5.0, 1.0, 5.0)),

    // Fried & Fast Foods
    ("fried chicken", NutritionFact::new(320.0, 19.0, 8.0, 21.0, 0.5)),
    ("kfc fried chicken", NutritionFact::new(290.0, 22.0, 9.0, 18.0, 1.0)),
    ("french fries", NutritionFact::new(365.0, 4.0, 63.0, 17.0, 0.3)),
    ("fried rice", NutritionFact::new(163.0, 3.0, 20.0, 7.0, 1.0)),
    ("fish and chips", NutritionFact::new(232.0, 12.0, 18.0, 13.0, 2.0)),

    // Malaysian Foods
    ("nasi lemak", NutritionFact::new(186.0, 4.0, 28.0, 6.0, 2.0)),
    ("rendang", NutritionFact::new(468.0, 26.0, 8.0, 37.0, 4.0)),
    ("char kway teow", NutritionFact::new(200.0, 8.0, 25.0, 8.0, 3.0)),
    ("laksa", NutritionFact::new(173.0, 7.0, 22.0, 7.0, 5.0)),
    ("satay chicken", NutritionFact::new(200.0, 25.0, 3.0, 9.0, 2.0)),
    ("mee goreng", NutritionFact::new(158.0, 6.0, 20.0, 6.0, 4.0)),
    ("roti canai", NutritionFact::new(301.0, 7.0, 43.0, 11.0, 2.0)),
    ("teh tarik", NutritionFact::new(83.0, 2.0, 14.0, 2.0, 12.0)),
    ("cendol", NutritionFact::new(180.0, 2.0, 45.0, 1.0, 35.0)),
    ("curry chicken", NutritionFact::new(149.0, 25.0, 5.0, 3.0, 3.0)),
    ("sambal sotong", NutritionFact::new(89.0, 16.0, 4.0, 1.0, 2.0)),
    ("ayam penyet", NutritionFact::new(250.0, 22.0, 12.0, 13.0, 8.0)),
    ("tom yam", NutritionFact::new(37.0, 2.0, 8.0, 0.5, 4.0)),
    ("wonton mee", NutritionFact::new(284.0, 14.0, 40.0, 8.0, 6.0)),
    ("bak kut teh", NutritionFact::new(120.0, 15.0, 3.0, 5.0, 1.0)),
    ("pan mee", NutritionFact::new(155.0, 6.0, 23.0, 4.0, 2.0)),
    ("chilli pan mee", NutritionFact::new(180.0, 7.0, 24.0, 6.0, 3.0)),
    ("curry mee", NutritionFact::new(195.0, 8.0, 26.0, 7.0, 4.0)),
    ("assam laksa", NutritionFact::new(165.0, 6.0, 25.0, 5.0, 8.0)),
    ("hokkien mee", NutritionFact::new(210.0, 9.0, 28.0, 7.0, 3.0)),
    ("mee rebus", NutritionFact::new(170.0, 7.0, 28.0, 4.0, 6.0)),
    ("mee siam", NutritionFact::new(160.0, 5.0, 26.0, 4.0, 8.0)),
    ("maggi goreng", NutritionFact::new(320.0, 8.0, 45.0, 12.0, 12.0)),
    ("nasi goreng kampung", NutritionFact::new(175.0, 6.0, 28.0, 5.0, 3.0)),
    ("nasi kerabu", NutritionFact::new(165.0, 4.0, 30.0, 4.0, 2.0)),
    ("nasi dagang", NutritionFact::new(190.0, 5.0, 35.0, 4.0, 2.0)),
    ("lemang", NutritionFact::new(143.0, 3.0, 32.0, 1.0, 1.0)),
    ("ketupat", NutritionFact::new(78.0, 1.5, 18.0, 0.1, 0.0)),
    ("lontong", NutritionFact::new(85.0, 2.0, 19.0, 0.2, 0.0)),
    ("rojak", NutritionFact::new(95.0, 2.0, 20.0, 2.0, 15.0)),
    ("pasembur", NutritionFact::new(120.0, 4.0, 18.0, 4.0, 8.0)),
    ("cakoi", NutritionFact::new(400.0, 6.0, 45.0, 22.0, 5.0)),
    ("yong tau foo", NutritionFact::new(85.0, 8.0, 6.0, 3.0, 1.0)),
    ("economy rice", NutritionFact::new(150.0, 8.0, 20.0, 5.0, 2.0)),
    ("mixed rice", NutritionFact::new(160.0, 9.0, 22.0, 5.0, 2.0)),
    ("dim sum", NutritionFact::new(250.0, 12.0, 20.0, 14.0, 3.0)),
    ("har gow", NutritionFact::new(180.0, 8.0, 20.0, 8.0, 2.0)),
    ("siu mai", NutritionFact::new(220.0, 10.0, 15.0, 14.0, 3.0)),
    ("chee cheong fun", NutritionFact::new(110.0, 3.0, 22.0, 1.0, 4.0)),
    ("lor mai gai", NutritionFact::new(200.0, 8.0, 30.0, 6.0, 2.0)),

    // Rice & Noodles
    ("white rice", NutritionFact::new(130.0, 2.7, 28.0, 0.3, 0.1)),
    ("brown rice", NutritionFact::new(111.0, 2.6, 23.0, 0.9, 0.4)),
    ("fried noodles", NutritionFact::new(138.0, 4.5, 20.0, 4.3, 2.0)),
    ("instant noodles", NutritionFact::new(448.0, 9.0, 58.0, 19.0, 6.0)),
    ("bee hoon", NutritionFact::new(348.0, 7.0, 77.0, 0.6, 1.0)),

    // Vegetables (Asian style)
    ("kangkung belacan", NutritionFact::new(45.0, 3.0, 7.0, 1.0, 2.0)),
    ("sayur lodeh", NutritionFact::new(65.0, 2.0, 8.0, 3.0, 4.0)),
    ("gado gado", NutritionFact::new(180.0, 6.0, 15.0, 11.0, 8.0)),
    ("acar", NutritionFact::new(35.0, 1.0, 8.0, 0.2, 6.0)),

    // Fruits (Tropical)
    ("durian", NutritionFact::new(147.0, 1.5, 27.0, 5.3, 25.0)),
    ("rambutan", NutritionFact::new(82.0, 0.9, 21.0, 0.2, 16.0)),
    ("mangosteen", NutritionFact::new(73.0, 0.4, 18.0, 0.6, 16.0)),
    ("papaya", NutritionFact::new(43.0, 0.5, 11.0, 0.3, 8.0)),
    ("mango", NutritionFact::new(60.0, 0.8, 15.0, 0.4, 14.0)),
    ("pineapple", NutritionFact::new(50.0, 0.5, 13.0, 0.1, 10.0)),

    // Drinks
    ("teh o", NutritionFact::new(34.0, 0.0, 9.0, 0.0, 9.0)),
    ("kopi o", NutritionFact::new(7.0, 0.3, 0.7, 0.0, 0.0)),
    ("milo", NutritionFact::new(95.0, 1.8, 20.0, 1.5, 18.0)),
    ("coconut water", NutritionFact::new(19.0, 0.7, 3.7, 0.2, 2.6)),

    // Unique Malaysian Foods
    ("bubur lambuk", NutritionFact::new(85.0, 3.0, 15.0, 2.0, 3.0)),
    ("tepung pelita", NutritionFact::new(160.0, 2.0, 35.0, 3.0, 25.0)),
    ("kuih seri muka", NutritionFact::new(180.0, 3.0, 38.0, 4.0, 30.0)),
    ("ondeh ondeh", NutritionFact::new(120.0, 1.5, 25.0, 2.0, 20.0)),
    ("pulut panggang", NutritionFact::new(220.0, 4.0, 45.0, 4.0, 15.0)),
    ("otak otak", NutritionFact::new(95.0, 12.0, 8.0, 2.0, 1.0)),
    ("kerabu mangga", NutritionFact::new(45.0, 1.0, 11.0, 0.5, 8.0)),
    ("ulam raja", NutritionFact::new(25.0, 2.0, 4.0, 0.3, 1.0)),
    ("pucuk paku", NutritionFact::new(30.0, 3.0, 5.0, 0.2, 1.0)),
    ("petai", NutritionFact::new(142.0, 6.0, 25.0, 1.0, 5.0)),
    ("jering", NutritionFact::new(157.0, 7.0, 27.0, 1.2, 6.0)),
    ("tempoyak", NutritionFact::new(120.0, 8.0, 15.0, 4.0, 10.0)),
    ("cincalok", NutritionFact::new(80.0, 15.0, 2.0, 1.0, 0.0)),
    ("budu", NutritionFact::new(35.0, 6.0, 3.0, 0.2, 1.0)),
    ("keropok keping", NutritionFact::new(380.0, 8.0, 65.0, 8.0, 5.0)),
    ("rempeyek", NutritionFact::new(480.0, 12.0, 45.0, 28.0, 8.0)),
    ("serunding", NutritionFact::new(520.0, 25.0, 15.0, 42.0, 3.0)),
    ("dendeng", NutritionFact::new(410.0, 55.0, 8.0, 18.0, 5.0)),
    ("ikan masin", NutritionFact::new(290.0, 62.0, 0.0, 2.0, 0.0)),
    ("telur masin", NutritionFact::new(180.0, 14.0, 1.0, 13.0, 0.0)),
    ("acar rampai", NutritionFact::new(40.0, 1.0, 9.0, 0.5, 7.0)),
    ("jeruk mangga", NutritionFact::new(65.0, 0.5, 16.0, 0.2, 14.0)),
    ("asinan", NutritionFact::new(50.0, 1.0, 12.0, 0.3, 10.0)),
    ("ais kacang", NutritionFact::new(150.0, 3.0, 35.0, 1.0, 30.0)),
    ("tau fu fa", NutritionFact::new(60.0, 4.0, 7.0, 2.0, 6.0)),
    ("soy bean", NutritionFact::new(45.0, 4.0, 4.0, 2.0, 2.0)),
    ("bubur kacang hijau", NutritionFact::new(110.0, 4.0, 22.0, 1.0, 8.0)),
    ("bubur cha cha", NutritionFact::new(140.0, 2.0, 32.0, 2.0, 25.0)),
    ("pengat", NutritionFact::new(180.0, 3.0, 42.0, 2.0, 35.0)),
    ("kolak", NutritionFact::new(160.0, 2.0, 38.0, 3.0, 30.0)),
    ("kuih talam", NutritionFact::new(140.0, 2.0, 32.0, 2.0, 25.0)),
    ("kuih ketayap", NutritionFact::new(190.0, 3.0, 35.0, 5.0, 28.0)),
    ("kuih dadar", NutritionFact::new(170.0, 3.0, 32.0, 4.0, 25.0)),
    ("pulut inti", NutritionFact::new(200.0, 3.0, 42.0, 4.0, 35.0)),
    ("kuih kosui", NutritionFact::new(120.0, 1.0, 28.0, 1.0, 22.0)),
    ("ang ku kueh", NutritionFact::new(180.0, 4.0, 38.0, 3.0, 30.0)),
    ("soon kueh", NutritionFact::new(150.0, 3.0, 30.0, 3.0, 8.0)),
    ("chai tow kway", NutritionFact::new(180.0, 4.0, 35.0, 3.0, 12.0)),
    ("mee sua", NutritionFact::new(320.0, 11.0, 70.0, 1.5, 2.0)),
    ("lor mee", NutritionFact::new(195.0, 8.0, 32.0, 4.0, 6.0)),
    ("mee hoon kueh", NutritionFact::new(165.0, 5.0, 32.0, 2.0, 3.0)),
    ("ban mian", NutritionFact::new(170.0, 6.0, 30.0, 3.0, 2.0)),
    ("fish head curry", NutritionFact::new(180.0, 22.0, 8.0, 7.0, 4.0)),
    ("sup tulang", NutritionFact::new(95.0, 12.0, 5.0, 3.0, 2.0)),
    ("soto ayam", NutritionFact::new(120.0, 15.0, 8.0, 4.0, 3.0)),
    ("gulai lemak", NutritionFact::new(160.0, 8.0, 12.0, 10.0, 5.0)),
    ("masak lemak cili padi", NutritionFact::new(140.0, 6.0, 15.0, 8.0, 6.0)),
    ("ikan patin tempoyak", NutritionFact::new(190.0, 25.0, 8.0, 7.0, 12.0)),
    ("ayam masak merah", NutritionFact::new(220.0, 28.0, 12.0, 8.0, 8.0)),
    ("daging salai", NutritionFact::new(380.0, 45.0, 5.0, 18.0, 2.0)),
    ("ikan bakar", NutritionFact::new(150.0, 28.0, 2.0, 3.0, 1.0)),
    ("ayam golek", NutritionFact::new(280.0, 35.0, 8.0, 12.0, 6.0)),

    // Traditional Malaysian snacks with sugar content
    ("kuih lapis", NutritionFact::new(190.0, 2.0, 35.0, 5.0, 28.0)),
    ("onde onde", NutritionFact::new(120.0, 1.5, 25.0, 2.0, 20.0)),
    ("pisang goreng", NutritionFact::new(150.0, 2.0, 25.0, 5.0, 18.0)),
    ("keropok lekor", NutritionFact::new(300.0, 12.0, 35.0, 12.0, 8.0)),
    ("murukku", NutritionFact::new(520.0, 11.0, 52.0, 29.0, 15.0)),
    ("kuih kapit", NutritionFact::new(450.0, 6.0, 65.0, 18.0, 45.0)),
    ("kuih bahulu", NutritionFact::new(380.0, 8.0, 70.0, 8.0, 55.0)),
    ("dodol", NutritionFact::new(320.0, 2.0, 75.0, 3.0, 65.0)),
    ("wajik", NutritionFact::new(250.0, 3.0, 55.0, 4.0, 45.0)),
    ("tapai", NutritionFact::new(110.0, 1.0, 26.0, 0.2, 20.0)),
    ("apam balik", NutritionFact::new(280.0, 6.0, 40.0, 11.0, 32.0)),
    ("roti john", NutritionFact::new(290.0, 15.0, 25.0, 16.0, 8.0)),
    ("murtabak", NutritionFact::new(350.0, 18.0, 30.0, 20.0, 12.0)),
    ("curry puff", NutritionFact::new(280.0, 8.0, 25.0, 17.0, 5.0)),
    ("karipap", NutritionFact::new(280.0, 8.0, 25.0, 17.0, 5.0)),
    ("epok epok", NutritionFact::new(260.0, 6.0, 28.0, 14.0, 6.0)),
    ("popiah", NutritionFact::new(120.0, 4.0, 18.0, 4.0, 8.0)),
    ("spring roll", NutritionFact::new(140.0, 4.0, 15.0, 8.0, 3.0)),
];
